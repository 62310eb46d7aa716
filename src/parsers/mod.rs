pub mod html;
pub mod price;


pub use html::{replace_line_breaks, select_inner_html, select_text};
pub use price::{CURRENCY_SYMBOL, extract_price, format_money};
