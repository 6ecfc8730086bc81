/// GPIO pin mode.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mode {
    OutputPushPull(Speed),
    OutputOpenDrain(Speed),
    AlternateFunctionOutputPushPull(Speed),
    AlternateFunctionOutputOpenDrain(Speed),
    FloatingInput,
    InputPullDown,
    InputPullUp,
}

/// GPIO switching speed.
///
/// Lower speeds can reduce ringing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Speed {
    Max10MHz = 1,
    Max2MHz = 2,
    Max50MHz = 3,
}

/// GPIO alternate function mode.
///
/// Subset of the GPIO [modes][Mode].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AlternateFunctionOutputMode {
    PushPull(Speed),
    OpenDrain(Speed),
}

/// GPIO input mode.
///
/// Subset of the GPIO [modes][Mode].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputMode {
    FloatingInput,
    InputPullDown,
    InputPullUp,
}

/// GPIO output mode.
///
/// Subset of the GPIO [modes][Mode].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputMode {
    PushPull(Speed),
    OpenDrain(Speed),
}

impl From<AlternateFunctionOutputMode> for Mode {
    #[inline]
    fn from(mode: AlternateFunctionOutputMode) -> Mode {
        match mode {
            AlternateFunctionOutputMode::PushPull(speed) => Mode::AlternateFunctionOutputPushPull(speed),
            AlternateFunctionOutputMode::OpenDrain(speed) => Mode::AlternateFunctionOutputOpenDrain(speed),
        }
    }
}

impl From<InputMode> for Mode {
    #[inline]
    fn from(mode: InputMode) -> Mode {
        match mode {
            InputMode::FloatingInput => Mode::FloatingInput,
            InputMode::InputPullDown => Mode::InputPullDown,
            InputMode::InputPullUp => Mode::InputPullUp,
        }
    }
}

impl From<OutputMode> for Mode {
    #[inline]
    fn from(mode: OutputMode) -> Mode {
        match mode {
            OutputMode::PushPull(speed) => Mode::OutputPushPull(speed),
            OutputMode::OpenDrain(speed) => Mode::OutputOpenDrain(speed),
        }
    }
}

impl OutputMode {
    /// Convert to equivalent [Alternate Function mode][AlternateFunctionOutputMode].
    #[inline]
    pub fn as_af(self) -> AlternateFunctionOutputMode {
        match self {
            Self::PushPull(speed) => AlternateFunctionOutputMode::PushPull(speed),
            Self::OpenDrain(speed) => AlternateFunctionOutputMode::OpenDrain(speed),
        }
    }
}

impl Mode {
    /// Four bit `CNFy:MODEy` value of the `CRL`/`CRH` registers.
    #[inline]
    pub(crate) fn nibble(self) -> u32 {
        match self {
            Mode::OutputPushPull(speed) => speed as u32,
            Mode::OutputOpenDrain(speed) => 1 << 2 | (speed as u32),
            Mode::AlternateFunctionOutputPushPull(speed) => 2 << 2 | (speed as u32),
            Mode::AlternateFunctionOutputOpenDrain(speed) => 3 << 2 | (speed as u32),
            Mode::FloatingInput => 1 << 2,
            Mode::InputPullDown | Mode::InputPullUp => 2 << 2,
        }
    }
}
