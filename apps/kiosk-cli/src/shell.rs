//! # Interactive Shell
//!
//! The menu loop: read a choice, call the store, print the outcome.
//!
//! ## Loop
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  print menu ──► read choice ──► MenuOption::parse                      │
//! │       ▲                              │                                  │
//! │       │            ┌─────────────────┼─────────────────┐                │
//! │       │            ▼                 ▼                 ▼                │
//! │       │        1..5: store op    None: "Invalid     0 / EOF:            │
//! │       │        Ok  → message      option."          farewell, return   │
//! │       │        Err → "Error: .."     │                                  │
//! │       └────────────┴─────────────────┘                                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Store errors never leave the loop. Only I/O failures on the terminal
//! itself end [`Shell::run`] with an error.

use std::io::{self, BufRead, Write};

use kiosk_core::validation::parse_integer;
use kiosk_core::{ProductCode, StoreError};
use tracing::{debug, info};

use crate::menu::MenuOption;
use crate::render::Renderer;
use crate::state::StoreState;

/// Whether the loop keeps going after an action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Exit,
}

/// Menu loop over any line-oriented input and any output.
pub struct Shell<R, W> {
    input: R,
    output: W,
    state: StoreState,
    render: Renderer,
}

impl<R: BufRead, W: Write> Shell<R, W> {
    pub fn new(input: R, output: W, state: StoreState, render: Renderer) -> Self {
        Shell {
            input,
            output,
            state,
            render,
        }
    }

    /// Runs until the exit option is chosen or input ends.
    pub fn run(&mut self, store_name: &str) -> io::Result<()> {
        info!(store_name, "shell started");
        self.say(&self.render.welcome(store_name))?;

        loop {
            self.say(&self.render.menu())?;
            let Some(choice) = self.prompt("Choose an option: ")? else {
                debug!("input closed");
                self.say(&self.render.farewell())?;
                break;
            };

            let flow = match MenuOption::parse(&choice) {
                Some(option) => {
                    debug!(?option, "menu selection");
                    self.dispatch(option)?
                }
                None => {
                    debug!(choice = choice.trim(), "unrecognized menu choice");
                    self.say(&self.render.invalid_option())?;
                    Flow::Continue
                }
            };

            if flow == Flow::Exit {
                break;
            }
        }

        info!("shell stopped");
        Ok(())
    }

    /// Consumes the shell, handing back the output (for tests).
    pub fn into_output(self) -> W {
        self.output
    }

    fn dispatch(&mut self, option: MenuOption) -> io::Result<Flow> {
        match option {
            MenuOption::ListProducts => {
                let text = self.state.with_store(|s| self.render.products(s.list_products()));
                self.say(&text)?;
            }
            MenuOption::AddToCart => return self.add_to_cart(),
            MenuOption::ViewCart => {
                let view = self.state.with_store(|s| s.view_cart());
                self.say(&self.render.cart(&view))?;
            }
            MenuOption::Checkout => self.checkout()?,
            MenuOption::ViewBalance => {
                let balance = self.state.with_store(|s| s.view_balance());
                self.say(&self.render.balance(balance))?;
            }
            MenuOption::Exit => {
                self.say(&self.render.farewell())?;
                return Ok(Flow::Exit);
            }
        }
        Ok(Flow::Continue)
    }

    /// Prompts for code then quantity.
    ///
    /// An unparseable or unknown code is reported before the quantity prompt.
    fn add_to_cart(&mut self) -> io::Result<Flow> {
        let Some(raw_code) = self.prompt("Product code: ")? else {
            return self.end_of_input();
        };
        let code = match parse_integer("product code", &raw_code)
            .map(ProductCode::new)
            .and_then(|code| self.state.with_store(|s| s.product(code).map(|_| code)))
        {
            Ok(code) => code,
            Err(err) => {
                self.report(&err)?;
                return Ok(Flow::Continue);
            }
        };

        let Some(raw_qty) = self.prompt("Quantity: ")? else {
            return self.end_of_input();
        };
        let result = parse_integer("quantity", &raw_qty)
            .and_then(|qty| self.state.with_store_mut(|s| s.add_to_cart(code, qty)));

        match result {
            Ok(added) => self.say(&self.render.added(&added))?,
            Err(err) => self.report(&err)?,
        }
        Ok(Flow::Continue)
    }

    /// Shows the cart being paid for, then the outcome.
    fn checkout(&mut self) -> io::Result<()> {
        let (view, result) = self.state.with_store_mut(|s| {
            let view = s.view_cart();
            (view, s.checkout())
        });

        match result {
            Ok(receipt) => {
                self.say(&self.render.cart(&view))?;
                self.say(&self.render.receipt(&receipt))
            }
            Err(StoreError::EmptyCart) => self.report(&StoreError::EmptyCart),
            Err(err) => {
                self.say(&self.render.cart(&view))?;
                self.report(&err)
            }
        }
    }

    fn end_of_input(&mut self) -> io::Result<Flow> {
        debug!("input closed mid-prompt");
        self.say(&self.render.farewell())?;
        Ok(Flow::Exit)
    }

    fn report(&mut self, err: &StoreError) -> io::Result<()> {
        // The printed "Error: ..." line is the user's report; this is a trace.
        debug!(error = %err, "operation rejected");
        self.say(&self.render.error(err))
    }

    fn say(&mut self, text: &str) -> io::Result<()> {
        writeln!(self.output, "{}", text)
    }

    /// Prints `label` and reads one line; `None` at end of input.
    fn prompt(&mut self, label: &str) -> io::Result<Option<String>> {
        write!(self.output, "{}", label)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line))
    }
}
