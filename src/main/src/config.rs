use core::time::Duration;

use ads1115::AdcConfig;

#[toml_cfg::toml_config]
pub struct TomlConfig {
    #[default("/dev/i2c-1")]
    i2c_bus: &'static str,
    #[default(72)]
    adc_address: u8,
    #[default(500)]
    settle_millis: u64,
    #[default(250)]
    sample_interval_millis: u64,
}

pub struct Config {
    pub bus_path: &'static str,
    pub adc: AdcConfig,
    pub settle_time: Duration,
    pub sample_interval: Duration,
}

impl Config {
    pub fn read() -> Self {
        Config::from(TOML_CONFIG)
    }
}

impl From<TomlConfig> for Config {
    fn from(config: TomlConfig) -> Self {
        Config {
            bus_path: config.i2c_bus,
            adc: AdcConfig {
                address: config.adc_address,
                ..AdcConfig::default()
            },
            settle_time: Duration::from_millis(config.settle_millis),
            sample_interval: Duration::from_millis(config.sample_interval_millis),
        }
    }
}
