use crate::error::{ChartError, ChartResult};

/// Parsed numeric display format, `printf`-style: an optional literal prefix,
/// a `%.Nf` conversion, and an optional literal suffix (`"$%.2f"`, `"%.0f ms"`).
///
/// Parsing happens once at view construction so the per-frame format path is
/// a plain fixed-precision write.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValueFormat {
    prefix: String,
    suffix: String,
    precision: usize,
}

const MAX_PRECISION: usize = 17;

impl Default for ValueFormat {
    fn default() -> Self {
        Self {
            prefix: String::new(),
            suffix: String::new(),
            precision: 1,
        }
    }
}

impl ValueFormat {
    /// One decimal place, no prefix or suffix.
    pub const DEFAULT_SPECIFIER: &'static str = "%.1f";

    pub fn parse(specifier: &str) -> ChartResult<Self> {
        let Some(start) = specifier.find("%.") else {
            return Err(ChartError::InvalidValueFormat(format!(
                "missing %.Nf conversion in {specifier:?}"
            )));
        };

        let rest = &specifier[start + 2..];
        let digit_count = rest.bytes().take_while(u8::is_ascii_digit).count();
        if digit_count == 0 {
            return Err(ChartError::InvalidValueFormat(format!(
                "missing precision digits in {specifier:?}"
            )));
        }
        if rest.as_bytes().get(digit_count) != Some(&b'f') {
            return Err(ChartError::InvalidValueFormat(format!(
                "conversion in {specifier:?} must end in 'f'"
            )));
        }

        let precision: usize = rest[..digit_count].parse().map_err(|_| {
            ChartError::InvalidValueFormat(format!("precision overflow in {specifier:?}"))
        })?;
        if precision > MAX_PRECISION {
            return Err(ChartError::InvalidValueFormat(format!(
                "precision {precision} exceeds {MAX_PRECISION}"
            )));
        }

        Ok(Self {
            prefix: specifier[..start].to_owned(),
            suffix: specifier[start + 2 + digit_count + 1..].to_owned(),
            precision,
        })
    }

    #[must_use]
    pub fn precision(&self) -> usize {
        self.precision
    }

    #[must_use]
    pub fn format(&self, value: f64) -> String {
        format!(
            "{}{value:.precision$}{}",
            self.prefix,
            self.suffix,
            precision = self.precision
        )
    }

    /// Reconstructs the specifier this format was parsed from.
    #[must_use]
    pub fn specifier(&self) -> String {
        format!("{}%.{}f{}", self.prefix, self.precision, self.suffix)
    }
}
