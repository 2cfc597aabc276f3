use crate::errors::AppResult;
use crate::serial;
use crate::ui::messages::warning;

/// Handle the `ports` command: print every detected serial port.
pub fn handle() -> AppResult<()> {
    let ports = serial::list_ports()?;

    if ports.is_empty() {
        warning("No serial ports detected.");
        return Ok(());
    }

    println!("🔌 Detected serial ports:\n");
    for port in ports {
        match port.product {
            Some(product) => println!("  {:<20} {:<10} {}", port.path, port.kind, product),
            None => println!("  {:<20} {}", port.path, port.kind),
        }
    }

    Ok(())
}
