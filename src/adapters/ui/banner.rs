//! Startup banner. Figlet title in the standard font plus a version line.

use std::io::{Write, stdout};

use crossterm::ExecutableCommand;
use crossterm::style::{Color, Print, ResetColor, SetForegroundColor};
use figlet_rs::FIGfont;

/// Banner accent (muted teal).
const ACCENT: Color = Color::Rgb {
    r: 0x2a,
    g: 0x9d,
    b: 0x8f,
};

/// Prints the welcome banner: the tool name in figlet's standard font,
/// then the version line. Purely cosmetic; failures are ignored.
pub fn print_welcome() {
    let mut out = stdout();
    if let Ok(font) = FIGfont::standard() {
        if let Some(figure) = font.convert("BoD Minutes") {
            let _ = out.execute(SetForegroundColor(ACCENT));
            let _ = out.execute(Print(figure.to_string()));
            let _ = out.execute(ResetColor);
        }
    }
    let _ = out.execute(Print(format!("bod-minutes v{}\n", env!("CARGO_PKG_VERSION"))));
    let _ = out.flush();
}
