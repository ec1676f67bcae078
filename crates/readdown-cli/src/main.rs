use anyhow::{Context, Result};
use clap::Parser;
use readdown_config::Config;
use readdown_engine::{io, render_with_options};
use std::io::Write;
use std::{fs, process};

mod args;
mod page;

use args::Args;
use page::PageOptions;

fn main() {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    let args = Args::parse();

    if let Err(e) = run(&args) {
        log::error!("{e:#}");
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(args: &Args) -> Result<()> {
    let config_path = Config::config_path();
    let config = match Config::load()? {
        Some(config) => {
            log::info!("Loaded config from {}", config_path.display());
            config
        }
        None => Config::default(),
    };

    let output = render_page(args, &config)?;

    match &args.output {
        Some(path) => {
            io::write_document(path, &output)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            log::info!("Wrote {}", path.display());
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(output.as_bytes())?;
            stdout.flush()?;
        }
    }

    Ok(())
}

/// Reads the input document and renders it as a page or a bare fragment.
fn render_page(args: &Args, config: &Config) -> Result<String> {
    if !io::is_markdown_path(&args.input) {
        log::warn!(
            "{} does not have a markdown extension, rendering anyway",
            args.input.display()
        );
    }

    let markdown = io::read_document(&args.input)
        .with_context(|| format!("Failed to read {}", args.input.display()))?;
    let fragment = render_with_options(&markdown, &config.render_options());

    if args.fragment || config.fragment_only {
        return Ok(fragment + "\n");
    }

    let extra_css = match &config.stylesheet {
        Some(path) => Some(
            fs::read_to_string(path)
                .with_context(|| format!("Failed to read stylesheet {}", path.display()))?,
        ),
        None => None,
    };
    let file_stem = args.input.file_stem().map(|stem| stem.to_string_lossy());
    let title = args
        .title
        .as_deref()
        .or(config.title.as_deref())
        .or(file_stem.as_deref());

    Ok(page::wrap(
        &fragment,
        &PageOptions {
            title,
            extra_css: extra_css.as_deref(),
        },
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use tempfile::TempDir;

    fn write_markdown(dir: &TempDir, name: &str, contents: &str) -> PathBuf {
        let path = dir.path().join(name);
        fs::write(&path, contents).unwrap();
        path
    }

    fn args_for(input: PathBuf) -> Args {
        Args {
            input,
            output: None,
            fragment: false,
            title: None,
        }
    }

    #[test]
    fn renders_full_page_titled_by_file_stem() {
        let dir = TempDir::new().unwrap();
        let input = write_markdown(&dir, "notes.md", "# Hello");

        let page = render_page(&args_for(input), &Config::default()).unwrap();

        assert!(page.starts_with("<!DOCTYPE html>"));
        assert!(page.contains("<title>notes</title>"));
        assert!(page.contains("<h1>Hello</h1>"));
    }

    #[test]
    fn fragment_flag_skips_template() {
        let dir = TempDir::new().unwrap();
        let input = write_markdown(&dir, "notes.md", "*hi*");
        let args = Args {
            fragment: true,
            ..args_for(input)
        };

        let output = render_page(&args, &Config::default()).unwrap();

        assert_eq!(output, "<p><em>hi</em></p>\n");
    }

    #[test]
    fn fragment_only_config_skips_template() {
        let dir = TempDir::new().unwrap();
        let input = write_markdown(&dir, "notes.md", "text");
        let config = Config {
            fragment_only: true,
            ..Config::default()
        };

        let output = render_page(&args_for(input), &config).unwrap();

        assert_eq!(output, "<p>text</p>\n");
    }

    #[test]
    fn command_line_title_wins_over_config() {
        let dir = TempDir::new().unwrap();
        let input = write_markdown(&dir, "notes.md", "");
        let args = Args {
            title: Some("From Args".to_string()),
            ..args_for(input)
        };
        let config = Config {
            title: Some("From Config".to_string()),
            ..Config::default()
        };

        let page = render_page(&args, &config).unwrap();

        assert!(page.contains("<title>From Args</title>"));
    }

    #[test]
    fn config_stylesheet_is_embedded() {
        let dir = TempDir::new().unwrap();
        let input = write_markdown(&dir, "notes.md", "");
        let css = write_markdown(&dir, "extra.css", "h1 { color: teal; }");
        let config = Config {
            stylesheet: Some(css),
            ..Config::default()
        };

        let page = render_page(&args_for(input), &config).unwrap();

        assert!(page.contains("h1 { color: teal; }"));
    }

    #[test]
    fn config_quote_depth_is_applied() {
        let dir = TempDir::new().unwrap();
        let input = write_markdown(&dir, "notes.md", ">> deep");
        let args = Args {
            fragment: true,
            ..args_for(input)
        };
        let config = Config {
            max_quote_depth: 1,
            ..Config::default()
        };

        let output = render_page(&args, &config).unwrap();

        assert_eq!(output, "<blockquote><p>&gt; deep</p></blockquote>\n");
    }

    #[test]
    fn missing_input_is_an_error() {
        let dir = TempDir::new().unwrap();

        let err = render_page(&args_for(dir.path().join("absent.md")), &Config::default())
            .unwrap_err();

        assert!(format!("{err:#}").contains("absent.md"));
    }

    #[test]
    fn missing_stylesheet_is_an_error() {
        let dir = TempDir::new().unwrap();
        let input = write_markdown(&dir, "notes.md", "");
        let config = Config {
            stylesheet: Some(dir.path().join("missing.css")),
            ..Config::default()
        };

        let err = render_page(&args_for(input), &config).unwrap_err();

        assert!(format!("{err:#}").contains("missing.css"));
    }
}
