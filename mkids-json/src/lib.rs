//! mkids-json contains the JSON schemas used by the API of mkids-httpd.
//!
//! Frequencies are given in MHz, delays in us and phases in radians.

#![warn(missing_docs)]

use serde::{Deserialize, Serialize};

/// API JSON schema.
///
/// This JSON schema corresponds to GET requests on `/api`. It contains the
/// state of the readout chain.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Api {
    /// Readout chain.
    pub chain: Chain,
    /// Mixer settings.
    pub mixer: Mixer,
    /// Current tones.
    pub tones: Tones,
    /// Channels enabled for streaming.
    pub channels: Channels,
}

/// Readout chain JSON schema.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Chain {
    /// Chain name.
    pub name: String,
    /// Name of the analysis chain.
    pub analysis: String,
    /// Name of the synthesis chain.
    pub synthesis: String,
    /// Whether the analysis and synthesis chains share their oscillators.
    pub dual: bool,
    /// Whether reads program the analysis oscillators.
    pub force_dds: bool,
    /// Frequency resolution (MHz).
    pub resolution: f64,
    /// Spacing between PFB channel centers (MHz).
    pub channel_spacing: f64,
    /// Number of PFB channels.
    pub num_channels: usize,
}

/// Mixer JSON schema.
///
/// This JSON schema corresponds to GET and PUT requests on `/api/mixer`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Mixer {
    /// Mixer frequency (MHz).
    ///
    /// The synthesis mixer uses this frequency and the analysis mixer uses
    /// its negative.
    pub frequency: f64,
    /// Nyquist zone (1 or 2).
    pub nyquist_zone: u8,
}

/// Mixer PATCH JSON schema.
///
/// This JSON schema corresponds to PATCH requests on `/api/mixer`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
pub struct PatchMixer {
    /// Mixer frequency (MHz).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub frequency: Option<f64>,
    /// Nyquist zone (1 or 2).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nyquist_zone: Option<u8>,
}

/// Complex number JSON schema.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Default)]
pub struct Complex {
    /// Real part.
    pub re: f64,
    /// Imaginary part.
    pub im: f64,
}

/// Tone JSON schema.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Tone {
    /// Quantized frequency (MHz).
    pub frequency: f64,
    /// Phase (radians).
    pub phase: f64,
    /// Gain.
    pub gain: f64,
    /// PFB channel.
    pub channel: usize,
    /// Oscillator offset from the channel center (MHz).
    pub offset: f64,
}

/// Tones JSON schema.
///
/// This JSON schema corresponds to GET requests on `/api/tones`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
pub struct Tones {
    /// Tones, in request order.
    pub tones: Vec<Tone>,
}

/// Tone request JSON schema.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct PutTone {
    /// Frequency (MHz).
    pub frequency: f64,
    /// Phase (radians).
    #[serde(default)]
    pub phase: f64,
    /// Gain.
    pub gain: f64,
    /// Complex compensation gain.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub compensation: Option<Complex>,
}

/// Tones PUT JSON schema.
///
/// This JSON schema corresponds to PUT requests on `/api/tones`. The tones
/// replace all the current tones.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
pub struct PutTones {
    /// Requested tones.
    pub tones: Vec<PutTone>,
}

/// Channels JSON schema.
///
/// This JSON schema corresponds to GET requests on `/api/channels`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
pub struct Channels {
    /// Channels enabled for streaming, in ascending order.
    pub enabled: Vec<usize>,
}

fn default_repeats() -> usize {
    1
}

/// Tone sweep request JSON schema.
///
/// This JSON schema corresponds to POST requests on `/api/sweep/tones`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ToneSweepRequest {
    /// Bandwidth covered by the sweep around each tone (MHz).
    pub bandwidth: f64,
    /// Number of frequency offsets.
    pub num_points: usize,
    /// Number of readouts averaged at each offset.
    #[serde(default = "default_repeats")]
    pub repeats: usize,
    /// Number of samples discarded at the start of each readout.
    #[serde(default)]
    pub pre_truncate: usize,
}

/// Tone sweep JSON schema.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ToneSweep {
    /// Nominal frequencies of the tones (MHz).
    pub tone_frequencies: Vec<f64>,
    /// Frequency offsets that were acquired (MHz).
    pub offsets: Vec<f64>,
    /// Mean responses, indexed by offset and tone.
    pub xs: Vec<Vec<Complex>>,
    /// `false` if the sweep was aborted.
    pub completed: bool,
}

fn default_gain() -> f64 {
    0.5
}

fn default_decimation() -> u32 {
    2
}

fn default_true() -> bool {
    true
}

/// Single sweep request JSON schema.
///
/// This JSON schema corresponds to POST requests on `/api/sweep/single`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct SingleSweepRequest {
    /// Start frequency (MHz).
    pub start: f64,
    /// End frequency (MHz).
    pub end: f64,
    /// Number of points.
    pub num_points: usize,
    /// Tone gain.
    #[serde(default = "default_gain")]
    pub gain: f64,
    /// Decimation of the analysis chain.
    #[serde(default = "default_decimation")]
    pub decimation: u32,
    /// Whether the mixer is moved to the center of the sweep.
    #[serde(default = "default_true")]
    pub set_mixer: bool,
}

/// Single sweep JSON schema.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
pub struct SingleSweep {
    /// Quantized frequencies (MHz).
    pub frequencies: Vec<f64>,
    /// Amplitudes.
    pub amplitudes: Vec<f64>,
    /// Phases (radians).
    pub phases: Vec<f64>,
    /// `false` if the sweep was aborted.
    pub completed: bool,
}

/// Delay measurement request JSON schema.
///
/// This JSON schema corresponds to POST requests on
/// `/api/calibration/delay`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct DelayRequest {
    /// Uniformly spaced frequency offsets (MHz).
    pub offsets: Vec<f64>,
    /// Response at each offset.
    pub xs: Vec<Complex>,
}

/// Delay JSON schema.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq)]
pub struct Delay {
    /// Delay (us).
    pub delay: f64,
    /// Phase at zero offset (radians).
    pub phase0: f64,
}

fn default_gap() -> usize {
    5
}

/// Phase fit request JSON schema.
///
/// This JSON schema corresponds to POST requests on
/// `/api/calibration/phase-fit`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct PhaseFitRequest {
    /// Frequencies (MHz).
    pub frequencies: Vec<f64>,
    /// Phases (radians).
    pub phases: Vec<f64>,
    /// Whether the phase is split at its jumps.
    #[serde(default = "default_true")]
    pub jumps: bool,
    /// Number of samples left out around each jump.
    #[serde(default = "default_gap")]
    pub gap: usize,
}

/// Linear fit of a phase segment JSON schema.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct SegmentFit {
    /// Slope (radians/MHz).
    pub slope: f64,
    /// Intercept (radians).
    pub intercept: f64,
    /// Index of the first sample.
    pub start: usize,
    /// Index one past the last sample.
    pub end: usize,
}

/// Phase jumps JSON schema.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct PhaseJumps {
    /// Phase step above which a step is a jump (radians).
    pub threshold: f64,
    /// Index of each jump.
    pub indices: Vec<usize>,
    /// Phase step of each jump (radians).
    pub values: Vec<f64>,
}

/// Phase fit JSON schema.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct PhaseFit {
    /// Fit of each segment.
    pub fits: Vec<SegmentFit>,
    /// Jumps that delimit the segments.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub jumps: Option<PhaseJumps>,
}

/// Versions JSON schema.
///
/// This JSON schema corresponds to GET requests on `/api/versions`.
#[derive(Serialize, Deserialize, Debug, Clone, Eq, PartialEq, Hash)]
pub struct Versions {
    /// Git version of mkids-httpd.
    pub mkids_httpd_git: String,
    /// Version of mkids-httpd.
    pub mkids_httpd_version: String,
}
