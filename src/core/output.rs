use super::symbol::Symbol;

/// Destination for symbols emitted by `print` continuations.
///
/// Emitted output is never retracted, even when the search later
/// backtracks past the point that produced it.
pub trait Printer {
    fn emit(&mut self, symbol: &Symbol);
}

/// Collect printed symbols as strings.
impl Printer for Vec<String> {
    fn emit(&mut self, symbol: &Symbol) {
        self.push(symbol.to_string());
    }
}

impl Printer for Vec<Symbol> {
    fn emit(&mut self, symbol: &Symbol) {
        self.push(symbol.clone());
    }
}

/// Write each printed symbol to standard output on its own line.
#[derive(Debug, Default, Clone, Copy)]
pub struct StdoutPrinter;

impl Printer for StdoutPrinter {
    fn emit(&mut self, symbol: &Symbol) {
        println!("{}", symbol);
    }
}
