//! Grammar productions, split by syntactic category.
//!
//! ```text
//! stmt  := IDENT '=' expr ';' | 'input' IDENT ';' | 'print' '(' expr ')' ';'
//!        | 'if' '(' expr ')' block ('else' (block | if))? | 'while' '(' expr ')' block
//! block := '{' stmt* '}'
//! ```

mod expr;
mod stmt;
