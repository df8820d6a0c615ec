use ansimark::color::{AnsiColor, Modifier};
use ansimark::{ansi, Style};
use std::io::Write;

fn main() -> std::io::Result<()> {
    let heading = Style::new(AnsiColor::Magenta, [Modifier::Bold, Modifier::Underline]);
    let mut stdout = std::io::stdout();

    heading.apply("ansimark").write_if_terminal(&mut stdout)?;
    writeln!(stdout)?;

    writeln!(stdout, "{}", ansi!("#[Green]compiled#[Default] with #$ slot", 1)?)?;
    writeln!(stdout, "{}", ansi!("#[Italic, 208]palette #[1:128:255]and 24-bit ##colors")?)?;

    for index in [21, 57, 93, 129, 165, 201] {
        let compiled = ansimark::compile(&format!("#[Reverse, {}]  ", index))?;
        write!(stdout, "{}", compiled)?;
    }
    writeln!(stdout)
}
