use anyhow::{Context, Result};
use linux_embedded_hal::I2cdev;

pub fn open_bus(path: &str) -> Result<I2cdev> {
    let bus = I2cdev::new(path).with_context(|| format!("unable to open I2C bus {}", path))?;
    Ok(bus)
}
