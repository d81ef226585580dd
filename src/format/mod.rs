//! Value formatting for labels and axis ticks.

mod number;
mod value;

pub use number::{fixed, is_integral, trimmed, truncated, with_separators};
pub use value::{CURRENCY_SYMBOL, format_number, format_value};
