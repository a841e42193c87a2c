use std::io::BufRead;
use viivakoodilib::decode;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Пример: разбираем коды построчно (stdin -> stdout)
    for line in std::io::stdin().lock().lines() {
        let line = line?;
        match decode(line.trim()) {
            Ok(r) => println!("{} {} {} {}", r.iban, r.reference, r.euro_amount, r.symbol),
            Err(e) => println!("{}: {e}", e.kind()),
        }
    }
    Ok(())
}
