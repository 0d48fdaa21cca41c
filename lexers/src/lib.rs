mod scanner;
mod helpers;

pub use scanner::Scanner;

pub use helpers::scan_identifier;
pub use helpers::scan_number;
pub use helpers::scan_whitespace;
pub use helpers::is_ident_char;
