//! Rule text parsing.
//!
//! The text is split into tokens by a small lexer and then read by a
//! recursive-descent parser with one production per rule kind:
//!
//! ```text
//! rule       := day_rule | week_rule | month_rule | year_rule
//! day_rule   := "d" SP integer                  ; 1..=400
//! week_rule  := "w" SP int_list                 ; each 1..=7, unique
//! month_rule := "m" SP day_list [SP month_list]
//! day_list   := signed_int ("," signed_int)*    ; each in -2..=-1 or 1..=31, unique
//! month_list := integer ("," integer)*          ; each 1..=12, unique
//! year_rule  := "y"
//! ```

mod error;
mod lexer;
mod parser;


pub use error::{ParseError, ParseErrorKind, ParseResult};
pub use parser::parse;
