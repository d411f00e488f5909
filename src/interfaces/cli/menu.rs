use crate::application::checkout::Checkout;
use crate::domain::capability::{Inspectable, PAYMENT_PROCESSOR, implements_interface};
use crate::domain::payment_method::PaymentMethod;
use crate::domain::selection::MenuSelection;
use crate::error::Result;
use crate::infrastructure::gateways::{gateway_for, processor_for};
use std::io::{BufRead, Write};

const BANNER: &str = "\
--- Global Checkout System ---

Choose a checkout option:

1. Test Credit Card (cc)
2. Test PayPal (paypal)
3. Test Bitcoin (btc)
4. Test All
0. Exit
Type 1, 2, 3, 4, or 0 and press ENTER.
";

pub const PROMPT: &str = "Option: ";
pub const FAREWELL: &str = "Goodbye! Salamat Shapi";
pub const INVALID_OPTION: &str = "Invalid option. Please choose 1, 2, 3, 4, or 0.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MenuState {
    AwaitingInput,
    Dispatching(MenuSelection),
    Terminated,
}

/// Why the menu loop stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuExit {
    /// The user chose "0".
    Requested,
    /// The input stream was closed.
    EndOfInput,
}

/// Interactive checkout menu.
///
/// Reads one line per iteration from `input` and writes everything the user sees
/// to `output`. The loop owns no state besides the two streams.
pub struct Menu<R: BufRead, W: Write> {
    input: R,
    output: W,
    checkout: Checkout,
}

impl<R: BufRead, W: Write> Menu<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self::with_checkout(input, output, Checkout::default())
    }

    pub fn with_checkout(input: R, output: W, checkout: Checkout) -> Self {
        Self {
            input,
            output,
            checkout,
        }
    }

    /// Runs until the user exits or the input ends.
    pub fn run(&mut self) -> Result<MenuExit> {
        let mut state = MenuState::AwaitingInput;
        let mut buf = Vec::new();

        loop {
            state = match state {
                MenuState::AwaitingInput => {
                    self.prompt()?;
                    buf.clear();
                    if self.input.read_until(b'\n', &mut buf)? == 0 {
                        tracing::debug!("input closed");
                        return Ok(MenuExit::EndOfInput);
                    }
                    // Undecodable bytes become U+FFFD and fall through to Invalid.
                    let line = String::from_utf8_lossy(&buf);
                    let selection = MenuSelection::parse(&line);
                    tracing::debug!(raw = line.trim(), ?selection, "selection parsed");
                    MenuState::Dispatching(selection)
                }
                MenuState::Dispatching(MenuSelection::Exit) => {
                    writeln!(self.output, "{FAREWELL}")?;
                    MenuState::Terminated
                }
                MenuState::Dispatching(selection) => {
                    self.dispatch(selection)?;
                    MenuState::AwaitingInput
                }
                MenuState::Terminated => {
                    self.output.flush()?;
                    return Ok(MenuExit::Requested);
                }
            };
        }
    }

    fn prompt(&mut self) -> Result<()> {
        writeln!(self.output, "{BANNER}")?;
        write!(self.output, "{PROMPT}")?;
        self.output.flush()?;
        Ok(())
    }

    fn dispatch(&mut self, selection: MenuSelection) -> Result<()> {
        if selection == MenuSelection::Invalid {
            writeln!(self.output, "{INVALID_OPTION}")?;
            return Ok(());
        }

        for &method in selection.checkouts() {
            self.checkout_with(method)?;
        }

        if let Some(method) = selection.interface_check() {
            self.interface_check(method)?;
        }
        Ok(())
    }

    fn checkout_with(&mut self, method: PaymentMethod) -> Result<()> {
        writeln!(self.output, "\nCheckout with {method} gateway:")?;
        let gateway = gateway_for(method);
        tracing::debug!(%method, "gateway created");
        self.checkout.run(gateway.as_ref(), &mut self.output)
    }

    fn interface_check(&mut self, method: PaymentMethod) -> Result<()> {
        let processor = processor_for(method);
        let implemented = implements_interface(&*processor, &PAYMENT_PROCESSOR);
        let type_name = processor.type_name();
        tracing::debug!(processor = type_name, implemented, "interface check");

        writeln!(self.output, "\n--- Interface check ---")?;
        writeln!(
            self.output,
            "{type_name} implements {}: {implemented}",
            PAYMENT_PROCESSOR.name
        )?;
        Ok(())
    }

    /// Consumes the menu and hands back the output stream.
    pub fn into_output(self) -> W {
        self.output
    }
}
