use std::io::Write;

use crate::error::Result;

/// Line printed by the greeter
pub fn greeting_line(name: &str) -> String {
    format!("¡Hola {} desde Python!", name)
}

/// Value returned by the greeter
pub fn greeting_message(name: &str) -> String {
    format!("Saludo para {}", name)
}

/// Print the greeting for `name` and return the greeting message.
pub fn greet<W: Write>(out: &mut W, name: &str) -> Result<String> {
    writeln!(out, "{}", greeting_line(name))?;
    log::debug!("greeted {:?}", name);
    Ok(greeting_message(name))
}
