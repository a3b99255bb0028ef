use dice_parser::{roll::RollContext, Reduction};
use std::io::{self, BufRead, Write};

// `<reduction> <expression>` uses that reduction; anything else is rolled.
fn split_reduction(line: &str) -> (Reduction, &str) {
    line.split_once(char::is_whitespace)
        .and_then(|(head, rest)| Some((head.parse().ok()?, rest)))
        .unwrap_or((Reduction::Roll, line))
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let stdin = io::stdin();
    let mut ctx: RollContext = RollContext::default();
    print!("> ");
    io::stdout().flush()?;
    for line in stdin.lock().lines() {
        let line = line?;
        let line = line.trim();
        if !line.is_empty() {
            let (reduction, expr) = split_reduction(line);
            match dice_parser::evaluate_with(reduction, expr, &mut ctx) {
                Ok(r) => println!("{}", r),
                Err(why) => eprintln!("Error: {}", why),
            }
        }
        print!("> ");
        io::stdout().flush()?;
    }
    Ok(())
}
