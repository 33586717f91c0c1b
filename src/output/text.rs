use crate::error::AppResult;

pub fn print_block(block: &str) -> AppResult<()> {
    for line in block.lines() {
        println!("{line}");
    }
    Ok(())
}

pub fn print_warning(message: &str) {
    eprintln!("warning: {message}");
}
