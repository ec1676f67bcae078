/// Hard line break: two spaces at the end of a line.
pub struct LineBreak;

impl LineBreak {
    pub const HARD: &'static str = "  \n";
    pub const TAG: &'static str = "<br>";
}
