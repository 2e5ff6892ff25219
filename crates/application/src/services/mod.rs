mod count_formatter;

pub use count_formatter::CountFormatter;
