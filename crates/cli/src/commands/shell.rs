//! Interactive cart session over line-oriented input.
//!
//! Each input line is either a cart event (`add 1`, `+ 1`, `- 1`,
//! `delete 1`, `like 1`, `remove 1`) or one of `show`, `help`, `quit`.
//! Bad input is reported and the session continues; only failures to draw
//! or write end it.

use std::io::{BufRead, Write};

use pocket_cart_core::Catalog;
use pocket_cart_widget::{Cart, CartEvent, Error, TextSurface, WidgetConfig};
use tracing::{debug, info};

const HELP: &str = "\
Commands:
  add <id>          add a catalog product (or one more of it)
  + <id>, - <id>    change quantity (removing at zero)
  delete <id>       remove a line whatever its quantity
  remove <id>       remove a line if present
  like <id>         toggle the liked flag
  show              print the cart
  help              print this help
  quit              leave the shell";

/// Run a session reading from `input` and writing to `out`.
///
/// # Errors
///
/// Returns an error if reading input, drawing the cart or writing fails.
pub fn run<I: BufRead, W: Write>(
    catalog: &Catalog,
    config: &WidgetConfig,
    seed: bool,
    input: I,
    out: &mut W,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut cart = Cart::from_config(TextSurface::new(), config);
    if seed {
        super::seed(&mut cart, catalog)?;
    } else {
        cart.display_cart()?;
    }
    write!(out, "{}", cart.surface().screen())?;

    for line in input.lines() {
        let line = line?;
        let command = line.trim();
        match command {
            "" => continue,
            "quit" | "exit" => break,
            "help" => writeln!(out, "{HELP}")?,
            "show" => write!(out, "{}", cart.surface().screen())?,
            _ => match command.parse::<CartEvent>() {
                Ok(event) => match cart.apply(event, catalog) {
                    Ok(()) => {
                        debug!(%event, "Applied event");
                        write!(out, "{}", cart.surface().screen())?;
                    }
                    Err(Error::UnknownProduct(id)) => {
                        writeln!(out, "error: no product with id {id} in the catalog")?;
                    }
                    Err(e) => return Err(e.into()),
                },
                Err(e) => writeln!(out, "error: {e} (type `help` for commands)")?,
            },
        }
    }

    info!(entries = cart.len(), total = %cart.total_price(), "Session ended");
    Ok(())
}
