mod print;

pub(crate) use print::print_result;
