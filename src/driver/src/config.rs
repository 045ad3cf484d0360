// Field encodings follow the ADS1115 configuration register layout.
// The high byte holds OS, MUX, PGA and MODE; the low byte holds DR and
// the comparator fields.

#[derive(Clone, Copy, Debug)]
pub enum AnalogInput {
    DifferentialAin0Ain1,
    DifferentialAin0Ain3,
    DifferentialAin1Ain3,
    DifferentialAin2Ain3,
    SingleEndedAin0,
    SingleEndedAin1,
    SingleEndedAin2,
    SingleEndedAin3,
}

#[derive(Clone, Copy, Debug)]
pub enum Gain {
    // Full-scale range in volts
    Fsr6V144,
    Fsr4V096,
    Fsr2V048,
    Fsr1V024,
    Fsr0V512,
    Fsr0V256,
}

#[derive(Clone, Copy, Debug)]
pub enum Mode {
    Continuous,
    SingleShot,
}

#[derive(Clone, Copy, Debug)]
pub enum DataRate {
    SPS8,
    SPS16,
    SPS32,
    SPS64,
    SPS128,
    SPS250,
    SPS475,
    SPS860,
}

#[derive(Clone, Copy, Debug)]
pub enum ComparatorMode {
    Traditional,
    Window,
}

#[derive(Clone, Copy, Debug)]
pub enum ComparatorPolarity {
    ActiveLow,
    ActiveHigh,
}

#[derive(Clone, Copy, Debug)]
pub enum ComparatorLatching {
    NonLatching,
    Latching,
}

#[derive(Clone, Copy, Debug)]
pub enum ComparatorQueue {
    SingleConversion,
    DoubleConversion,
    QuadConversion,
    Disable,
}

#[derive(Clone, Copy, Debug)]
pub struct ComparatorConfig {
    pub mode: ComparatorMode,
    pub polarity: ComparatorPolarity,
    pub latching: ComparatorLatching,
    pub queue: ComparatorQueue,
}

#[derive(Clone, Copy, Debug)]
pub struct AdcConfig {
    pub address: u8,
    pub input: AnalogInput,
    pub gain: Gain,
    pub mode: Mode,
    pub rate: DataRate,
    pub comparator: ComparatorConfig,
}

impl Default for ComparatorConfig {
    fn default() -> Self {
        ComparatorConfig {
            mode: ComparatorMode::Traditional,
            polarity: ComparatorPolarity::ActiveLow,
            latching: ComparatorLatching::NonLatching,
            queue: ComparatorQueue::Disable,
        }
    }
}

impl From<ComparatorConfig> for u8 {
    fn from(input: ComparatorConfig) -> u8 {
        u8::from(input.mode)
            | u8::from(input.polarity)
            | u8::from(input.latching)
            | u8::from(input.queue)
    }
}

impl AdcConfig {
    pub fn to_u8_array(&self, begin: bool) -> [u8; 2] {
        let start_bit: u8 = match begin {
            true => 0b1,
            false => 0b0,
        };
        let config_high = start_bit << 7
            | u8::from(self.input)
            | u8::from(self.gain)
            | u8::from(self.mode);
        let config_low = u8::from(self.rate)
            | u8::from(self.comparator);

        [config_high, config_low]
    }
}

impl Default for AdcConfig {
    fn default() -> Self {
        AdcConfig {
            address: 0b1001000,
            input: AnalogInput::DifferentialAin0Ain1,
            gain: Gain::Fsr2V048,
            mode: Mode::Continuous,
            rate: DataRate::SPS128,
            comparator: ComparatorConfig::default(),
        }
    }
}

impl From<AnalogInput> for u8 {
    fn from(input: AnalogInput) -> u8 {
        let value: u8 = match input {
            AnalogInput::DifferentialAin0Ain1 => 0b000,
            AnalogInput::DifferentialAin0Ain3 => 0b001,
            AnalogInput::DifferentialAin1Ain3 => 0b010,
            AnalogInput::DifferentialAin2Ain3 => 0b011,
            AnalogInput::SingleEndedAin0 => 0b100,
            AnalogInput::SingleEndedAin1 => 0b101,
            AnalogInput::SingleEndedAin2 => 0b110,
            AnalogInput::SingleEndedAin3 => 0b111,
        };
        value << 4
    }
}

impl From<Gain> for u8 {
    fn from(input: Gain) -> u8 {
        let value: u8 = match input {
            Gain::Fsr6V144 => 0b000,
            Gain::Fsr4V096 => 0b001,
            Gain::Fsr2V048 => 0b010,
            Gain::Fsr1V024 => 0b011,
            Gain::Fsr0V512 => 0b100,
            Gain::Fsr0V256 => 0b101,
        };
        value << 1
    }
}

impl From<Mode> for u8 {
    fn from(input: Mode) -> u8 {
        match input {
            Mode::Continuous => 0b0,
            Mode::SingleShot => 0b1,
        }
    }
}

impl From<DataRate> for u8 {
    fn from(input: DataRate) -> u8 {
        let value: u8 = match input {
            DataRate::SPS8 => 0b000,
            DataRate::SPS16 => 0b001,
            DataRate::SPS32 => 0b010,
            DataRate::SPS64 => 0b011,
            DataRate::SPS128 => 0b100,
            DataRate::SPS250 => 0b101,
            DataRate::SPS475 => 0b110,
            DataRate::SPS860 => 0b111,
        };
        value << 5
    }
}

impl From<ComparatorMode> for u8 {
    fn from(input: ComparatorMode) -> u8 {
        let value: u8 = match input {
            ComparatorMode::Traditional => 0b0,
            ComparatorMode::Window => 0b1,
        };
        value << 4
    }
}

impl From<ComparatorPolarity> for u8 {
    fn from(input: ComparatorPolarity) -> u8 {
        let value: u8 = match input {
            ComparatorPolarity::ActiveLow => 0b0,
            ComparatorPolarity::ActiveHigh => 0b1,
        };
        value << 3
    }
}

impl From<ComparatorLatching> for u8 {
    fn from(input: ComparatorLatching) -> u8 {
        let value: u8 = match input {
            ComparatorLatching::NonLatching => 0b0,
            ComparatorLatching::Latching => 0b1,
        };
        value << 2
    }
}

impl From<ComparatorQueue> for u8 {
    fn from(input: ComparatorQueue) -> u8 {
        match input {
            ComparatorQueue::SingleConversion => 0b00,
            ComparatorQueue::DoubleConversion => 0b01,
            ComparatorQueue::QuadConversion => 0b10,
            ComparatorQueue::Disable => 0b11,
        }
    }
}
