use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread::sleep;

use anyhow::{Context, Result};
use log::*;
use simple_signal::{self, Signal};

use ads1115::Ads1115;

mod config;
mod i2c;

use config::Config;

fn main() -> Result<()> {
    env_logger::init();

    let config = Config::read();
    info!(
        "ADS1115 on {} at address {:#04x}",
        config.bus_path, config.adc.address
    );

    let bus = i2c::open_bus(config.bus_path)?;
    let mut adc = Ads1115::new(bus, config.adc);
    adc.probe()
        .with_context(|| format!("no ADC found at address {:#04x}", config.adc.address))?;

    adc.start().context("starting continuous conversion")?;
    // Let the first conversion complete before reading
    sleep(config.settle_time);

    let running = Arc::new(AtomicBool::new(true));

    simple_signal::set_handler(&[Signal::Int, Signal::Term], {
        let r = running.clone();
        move |_signals| {
            r.store(false, Ordering::SeqCst);
        }
    });

    while running.load(Ordering::SeqCst) {
        let sample = adc.read().context("reading conversion result")?;
        println!("AIN0: {}", sample);
        sleep(config.sample_interval);
    }

    info!("Received shutdown signal, exiting");
    Ok(())
}
