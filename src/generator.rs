use rand::Rng;
use thiserror::Error;

/// Shortest password the widget will produce.
pub const MIN_LENGTH: usize = 4;
/// Longest password the widget will produce.
pub const MAX_LENGTH: usize = 100;

const LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";
const UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const DIGITS: &str = "0123456789";
/// The fixed symbol set offered by the "Include Symbols" toggle.
pub const SYMBOLS: &str = "!@#$%^&*()+={}~`";

/// Characters dropped by the "exclude similar" option: letters and digits
/// that are easy to confuse at a glance. Exactly these five, case-sensitive.
pub const SIMILAR_CHARS: [char; 5] = ['O', '0', 'I', 'l', '1'];

/// Where user-supplied custom text gets spliced into the generated string.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CustomPosition {
    #[default]
    Start,
    End,
    Random,
}

impl CustomPosition {
    pub const ALL: [CustomPosition; 3] =
        [CustomPosition::Start, CustomPosition::End, CustomPosition::Random];

    pub fn label(self) -> &'static str {
        match self {
            CustomPosition::Start => "Start",
            CustomPosition::End => "End",
            CustomPosition::Random => "Random",
        }
    }
}

/// Everything the generator needs to produce one password. Rebuilt from the
/// form state on every UI change; comparing against the previous value is how
/// the app decides a regeneration is due.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorConfig {
    pub length: usize,
    pub include_uppercase: bool,
    pub include_numbers: bool,
    pub include_symbols: bool,
    pub exclude_similar: bool,
    pub custom_text: String,
    pub custom_position: CustomPosition,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            length: 8,
            include_uppercase: false,
            include_numbers: false,
            include_symbols: false,
            exclude_similar: false,
            custom_text: String::new(),
            custom_position: CustomPosition::Start,
        }
    }
}

/// Ways a configuration can be impossible to satisfy. Surfaced to the UI,
/// which keeps the previous password on screen instead of crashing.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("no usable characters: the character pool is empty")]
    EmptyPool,
    #[error("custom text is {custom_len} characters but the password is only {length}")]
    CustomTextTooLong { custom_len: usize, length: usize },
}

/// Assembles the character pool for a config: lowercase always, the other
/// classes additive, then the similar-looking characters filtered out if
/// requested.
pub fn build_pool(config: &GeneratorConfig) -> Vec<char> {
    let mut charset = String::from(LOWERCASE);

    if config.include_uppercase {
        charset.push_str(UPPERCASE);
    }
    if config.include_numbers {
        charset.push_str(DIGITS);
    }
    if config.include_symbols {
        charset.push_str(SYMBOLS);
    }

    let mut pool: Vec<char> = charset.chars().collect();
    if config.exclude_similar {
        pool.retain(|c| !SIMILAR_CHARS.contains(c));
    }
    pool
}

/// Generates one password: `length` independent uniform draws from the pool,
/// then the optional custom-text splice. The returned string always has
/// exactly the (clamped) requested length.
pub fn generate(config: &GeneratorConfig) -> Result<String, ConfigError> {
    let length = config.length.clamp(MIN_LENGTH, MAX_LENGTH);

    // Lowercase is always in the pool today, but the draw below must never
    // see an empty slice.
    let pool = build_pool(config);
    if pool.is_empty() {
        return Err(ConfigError::EmptyPool);
    }

    let mut rng = rand::rng();
    let mut chars: Vec<char> = (0..length)
        .map(|_| {
            let idx = rng.random_range(0..pool.len());
            pool[idx]
        })
        .collect();

    if !config.custom_text.is_empty() {
        splice_custom_text(&mut chars, &config.custom_text, config.custom_position, &mut rng)?;
    }

    Ok(chars.into_iter().collect())
}

/// Overwrites part of the generated characters with the custom text. The
/// splice never grows the password; text longer than the password is rejected
/// for every placement mode.
fn splice_custom_text(
    chars: &mut [char],
    text: &str,
    position: CustomPosition,
    rng: &mut impl Rng,
) -> Result<(), ConfigError> {
    let custom: Vec<char> = text.chars().collect();
    let length = chars.len();

    if custom.len() > length {
        return Err(ConfigError::CustomTextTooLong {
            custom_len: custom.len(),
            length,
        });
    }

    let span = length - custom.len();
    let offset = match position {
        CustomPosition::Start => 0,
        CustomPosition::End => span,
        // Uniform over [0, span); clamps to 0 when the text exactly fits.
        CustomPosition::Random => {
            if span == 0 {
                0
            } else {
                rng.random_range(0..span)
            }
        }
    };

    chars[offset..offset + custom.len()].copy_from_slice(&custom);
    Ok(())
}
