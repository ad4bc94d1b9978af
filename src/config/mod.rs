//! Configuration for digest computation.
//!
//! This module provides types to configure how a digest is computed:
//!
//! - [`DigestOptions`] - Output encoding, read mode and block size
//! - [`Encoding`] - Text encoding of the finalized digest
//! - [`ReadMode`] - The resolved reading strategy
//!
//! # Example
//!
//! ```
//! use filedigest::{DigestOptions, Encoding};
//!
//! // Line-ending-insensitive digest, rendered as base64
//! let options = DigestOptions::default()
//!     .with_text_mode(true)
//!     .with_encoding(Encoding::Base64);
//!
//! // Fast fingerprint of a large file
//! let options = DigestOptions::default()
//!     .with_partial(true)
//!     .with_partial_multiplier(2.0);
//! options.validate()?;
//!
//! # Ok::<(), filedigest::DigestError>(())
//! ```

use strum::{Display, EnumIter, EnumString};

use crate::error::DigestError;

/// Default read block size (8 KiB).
pub const DEFAULT_BLOCK_SIZE: usize = 8 * 1024;

/// Largest accepted read block size (64 MiB).
pub const MAX_BLOCK_SIZE: usize = 64 * 1024 * 1024;

/// Skip multiplier used by partial reads when none is set.
pub const DEFAULT_PARTIAL_MULTIPLIER: f64 = 1.0;

/// Text encoding applied to the finalized digest bytes.
///
/// `Base64` uses the standard alphabet with padding; `Base64Url` uses the
/// URL-safe alphabet without padding.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display, EnumString, EnumIter,
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Encoding {
    /// Lowercase hexadecimal.
    #[default]
    Hex,
    /// Standard base64 with padding.
    Base64,
    /// URL-safe base64 without padding.
    Base64Url,
}

impl Encoding {
    /// Parses an encoding name (`hex`, `base64`, `base64url`).
    ///
    /// # Errors
    ///
    /// Returns [`DigestError::InvalidOption`] for any other name.
    ///
    /// # Example
    ///
    /// ```
    /// use filedigest::Encoding;
    ///
    /// assert_eq!(Encoding::parse("base64url")?, Encoding::Base64Url);
    /// assert!(Encoding::parse("base32").is_err());
    /// # Ok::<(), filedigest::DigestError>(())
    /// ```
    pub fn parse(name: &str) -> Result<Self, DigestError> {
        name.parse().map_err(|_| DigestError::InvalidOption {
            message: "encoding must be one of hex, base64, base64url",
        })
    }
}

/// The reading strategy resolved from a [`DigestOptions`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ReadMode {
    /// Every byte of the source, in order.
    Full,
    /// Sampled blocks with growing gaps between them.
    Partial {
        /// Skip growth factor (already defaulted).
        multiplier: f64,
    },
    /// Line by line, with line terminators normalized to `\n`.
    Text,
}

/// Options controlling how a digest is computed and rendered.
///
/// `DigestOptions` is a small builder. Setters do not validate; call
/// [`DigestOptions::validate`] or let the hashing entry points do it.
///
/// # Precedence
///
/// `text_mode` wins over `partial`: text hashing always reads the whole
/// source, so `partial` is ignored when both are set.
///
/// # Example
///
/// ```
/// use filedigest::{DigestOptions, ReadMode};
///
/// let options = DigestOptions::default().with_partial(true);
/// assert_eq!(options.read_mode(), ReadMode::Partial { multiplier: 1.0 });
///
/// let options = options.with_text_mode(true);
/// assert_eq!(options.read_mode(), ReadMode::Text);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DigestOptions {
    /// Encoding of the rendered digest.
    encoding: Encoding,

    /// Hash line by line with normalized terminators.
    text_mode: bool,

    /// Hash sampled blocks only (binary mode).
    partial: bool,

    /// Skip growth factor for partial reads; `None` means the default.
    partial_multiplier: Option<f64>,

    /// Size of each read in bytes.
    block_size: usize,
}

impl DigestOptions {
    /// Sets the output encoding.
    pub fn with_encoding(mut self, encoding: Encoding) -> Self {
        self.encoding = encoding;
        self
    }

    /// Enables or disables text mode.
    pub fn with_text_mode(mut self, text_mode: bool) -> Self {
        self.text_mode = text_mode;
        self
    }

    /// Enables or disables partial reads.
    pub fn with_partial(mut self, partial: bool) -> Self {
        self.partial = partial;
        self
    }

    /// Sets the partial skip multiplier.
    ///
    /// After the n-th block the reader skips `floor(|block_size * n *
    /// multiplier|)` bytes. Zero reads the whole source.
    ///
    /// Note: This does not validate the value. Negative and non-finite values
    /// are rejected by [`DigestOptions::validate`].
    pub fn with_partial_multiplier(mut self, multiplier: f64) -> Self {
        self.partial_multiplier = Some(multiplier);
        self
    }

    /// Sets the read block size.
    ///
    /// # Example
    ///
    /// ```
    /// use filedigest::DigestOptions;
    ///
    /// let options = DigestOptions::default().with_block_size(64 * 1024);
    /// assert_eq!(options.block_size(), 65536);
    /// ```
    pub fn with_block_size(mut self, size: usize) -> Self {
        self.block_size = size;
        self
    }

    /// Returns the output encoding.
    pub fn encoding(&self) -> Encoding {
        self.encoding
    }

    /// Returns true if text mode is enabled.
    pub fn text_mode(&self) -> bool {
        self.text_mode
    }

    /// Returns true if partial reads were requested.
    pub fn partial(&self) -> bool {
        self.partial
    }

    /// Returns the partial multiplier as set, without defaulting.
    pub fn partial_multiplier(&self) -> Option<f64> {
        self.partial_multiplier
    }

    /// Returns the read block size.
    pub fn block_size(&self) -> usize {
        self.block_size
    }

    /// Returns the partial multiplier, falling back to
    /// [`DEFAULT_PARTIAL_MULTIPLIER`] when unset.
    pub fn resolved_partial_multiplier(&self) -> f64 {
        self.partial_multiplier.unwrap_or(DEFAULT_PARTIAL_MULTIPLIER)
    }

    /// Resolves the reading strategy.
    pub fn read_mode(&self) -> ReadMode {
        if self.text_mode {
            ReadMode::Text
        } else if self.partial {
            ReadMode::Partial {
                multiplier: self.resolved_partial_multiplier(),
            }
        } else {
            ReadMode::Full
        }
    }

    /// Validates the current options.
    ///
    /// # Errors
    ///
    /// Returns [`DigestError::InvalidOption`] if:
    /// - `block_size` is zero or larger than [`MAX_BLOCK_SIZE`]
    /// - `partial_multiplier` is negative, NaN or infinite
    ///
    /// # Example
    ///
    /// ```
    /// use filedigest::DigestOptions;
    ///
    /// let options = DigestOptions::default().with_partial_multiplier(-1.0);
    /// assert!(options.validate().is_err());
    /// ```
    pub fn validate(&self) -> Result<(), DigestError> {
        if self.block_size == 0 {
            return Err(DigestError::InvalidOption {
                message: "block_size must be non-zero",
            });
        }

        if self.block_size > MAX_BLOCK_SIZE {
            return Err(DigestError::InvalidOption {
                message: "block_size cannot exceed MAX_BLOCK_SIZE",
            });
        }

        if let Some(multiplier) = self.partial_multiplier {
            if !multiplier.is_finite() {
                return Err(DigestError::InvalidOption {
                    message: "partial_multiplier must be finite",
                });
            }
            if multiplier < 0.0 {
                return Err(DigestError::InvalidOption {
                    message: "partial_multiplier cannot be negative",
                });
            }
        }

        Ok(())
    }
}

impl Default for DigestOptions {
    fn default() -> Self {
        Self {
            encoding: Encoding::default(),
            text_mode: false,
            partial: false,
            partial_multiplier: None,
            block_size: DEFAULT_BLOCK_SIZE,
        }
    }
}
