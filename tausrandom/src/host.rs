//! Host-integration adapter.
//!
//! A numeric front end hands the generator four scalars (three seeds and a
//! length) in its own representation, expects one freshly allocated word
//! buffer back, and treats a failed allocation as fatal. [`HostArgs`] does the
//! marshaling and the invocation; invalid scalars are refused here so the
//! generator never sees them.

use crate::error::TausError;
use crate::taus::Taus88;

/// Number of scalars a host call binds: three seeds and a length.
pub const HOST_ARG_COUNT: usize = 4;

/// The four bound scalar inputs of one host call.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HostArgs {
    pub seed0: u32,
    pub seed1: u32,
    pub seed2: u32,
    pub len: u32,
    skip: u64,
    trace: bool,
}

impl HostArgs {
    pub fn new(seed0: u32, seed1: u32, seed2: u32, len: u32) -> Self {
        Self {
            seed0,
            seed1,
            seed2,
            len,
            skip: 0,
            trace: false,
        }
    }

    /// Discard the first `skip` words of the stream before filling the output.
    pub fn with_skip(mut self, skip: u64) -> Self {
        self.skip = skip;
        self
    }

    /// Print the seed trace to stderr on every invocation.
    pub fn with_trace(mut self, trace: bool) -> Self {
        self.trace = trace;
        self
    }

    /// Marshal double-precision scalars, as a numeric-computing host stores them.
    ///
    /// Each value must be finite, non-negative, integral and fit in a `u32`.
    pub fn from_scalars(scalars: &[f64]) -> Result<Self, TausError> {
        check_count(scalars.len())?;

        let mut words = [0u32; HOST_ARG_COUNT];
        for (index, (&value, word)) in scalars.iter().zip(words.iter_mut()).enumerate() {
            *word = scalar_to_u32(value).ok_or(TausError::InvalidScalar { index, value })?;
        }

        Ok(Self::new(words[0], words[1], words[2], words[3]))
    }

    /// Marshal textual scalars (decimal, or hexadecimal with a `0x` prefix).
    pub fn parse_strs(inputs: &[&str]) -> Result<Self, TausError> {
        check_count(inputs.len())?;

        let mut words = [0u32; HOST_ARG_COUNT];
        for (index, (&input, word)) in inputs.iter().zip(words.iter_mut()).enumerate() {
            *word = parse_scalar(input).ok_or_else(|| TausError::ParseScalar {
                index,
                input: input.to_string(),
            })?;
        }

        Ok(Self::new(words[0], words[1], words[2], words[3]))
    }

    pub fn seeds(&self) -> [u32; 3] {
        [self.seed0, self.seed1, self.seed2]
    }

    /// The diagnostic line announcing the seeds of a call.
    pub fn trace_seeds(&self) -> String {
        format!(
            "Taus_URNG, seeds are {} {} {}",
            self.seed0, self.seed1, self.seed2
        )
    }

    /// Allocate the output buffer and fill it.
    pub fn invoke(&self) -> Result<Vec<u32>, TausError> {
        self.emit_trace();
        self.generator().try_take(self.len)
    }

    /// Fill a buffer the host already allocated. Its length must equal `len`.
    pub fn invoke_into(&self, out: &mut [u32]) -> Result<(), TausError> {
        if out.len() != self.len as usize {
            return Err(TausError::BufferLength {
                expected: self.len as usize,
                actual: out.len(),
            });
        }

        self.emit_trace();
        self.generator().fill(out);
        Ok(())
    }

    fn generator(&self) -> Taus88 {
        let mut rng = Taus88::from_seeds(self.seeds());
        rng.skip(self.skip);
        rng
    }

    fn emit_trace(&self) {
        if self.trace {
            eprintln!("{}", self.trace_seeds());
        }
    }
}

fn check_count(actual: usize) -> Result<(), TausError> {
    if actual != HOST_ARG_COUNT {
        return Err(TausError::ArgumentCount {
            expected: HOST_ARG_COUNT,
            actual,
        });
    }
    Ok(())
}

fn scalar_to_u32(value: f64) -> Option<u32> {
    if value.is_finite() && value >= 0.0 && value.fract() == 0.0 && value <= f64::from(u32::MAX) {
        Some(value as u32)
    } else {
        None
    }
}

/// Parse one unsigned 32-bit scalar written in decimal or `0x` hexadecimal.
pub fn parse_scalar(input: &str) -> Option<u32> {
    let input = input.trim();
    match input
        .strip_prefix("0x")
        .or_else(|| input.strip_prefix("0X"))
    {
        Some(hex) => u32::from_str_radix(hex, 16).ok(),
        None => input.parse().ok(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_scalars_accepts_integral_values() {
        let args = HostArgs::from_scalars(&[123456789.0, 362436069.0, 521288629.0, 5.0]).unwrap();
        assert_eq!(args, HostArgs::new(123456789, 362436069, 521288629, 5));
        assert_eq!(
            args.invoke().unwrap(),
            vec![231973701, 2450055554, 1850835924, 1554551309, 1039485522]
        );
    }

    #[test]
    fn test_from_scalars_accepts_u32_max() {
        let args = HostArgs::from_scalars(&[4294967295.0, 0.0, 1.0, 0.0]).unwrap();
        assert_eq!(args.seed0, u32::MAX);
    }

    #[test]
    fn test_from_scalars_rejects_bad_values() {
        let cases = [
            (-1.0, 0),
            (1.5, 0),
            (4294967296.0, 0),
            (f64::NAN, 0),
            (f64::INFINITY, 0),
        ];
        for (value, index) in cases {
            let err = HostArgs::from_scalars(&[value, 1.0, 1.0, 1.0]).unwrap_err();
            assert!(
                matches!(err, TausError::InvalidScalar { index: i, .. } if i == index),
                "Value {} should be rejected, got {:?}",
                value,
                err
            );
        }

        let err = HostArgs::from_scalars(&[1.0, 1.0, 1.0, -3.0]).unwrap_err();
        assert_eq!(err, TausError::InvalidScalar { index: 3, value: -3.0 });
    }

    #[test]
    fn test_argument_count() {
        assert_eq!(
            HostArgs::from_scalars(&[1.0, 2.0, 3.0]),
            Err(TausError::ArgumentCount {
                expected: 4,
                actual: 3
            })
        );
        assert_eq!(
            HostArgs::parse_strs(&["1", "2", "3", "4", "5"]),
            Err(TausError::ArgumentCount {
                expected: 4,
                actual: 5
            })
        );
    }

    #[test]
    fn test_parse_strs() {
        let args = HostArgs::parse_strs(&["0xFFFFFFFF", "8", " 16 ", "6"]).unwrap();
        assert_eq!(args, HostArgs::new(u32::MAX, 8, 16, 6));

        let err = HostArgs::parse_strs(&["1", "-2", "3", "4"]).unwrap_err();
        assert_eq!(
            err,
            TausError::ParseScalar {
                index: 1,
                input: "-2".to_string()
            }
        );
    }

    #[test]
    fn test_parse_scalar() {
        assert_eq!(parse_scalar("0"), Some(0));
        assert_eq!(parse_scalar("4294967295"), Some(u32::MAX));
        assert_eq!(parse_scalar("4294967296"), None);
        assert_eq!(parse_scalar("0x1f"), Some(31));
        assert_eq!(parse_scalar("0X1F"), Some(31));
        assert_eq!(parse_scalar("abc"), None);
        assert_eq!(parse_scalar(""), None);
    }

    #[test]
    fn test_invoke_into_checks_length() {
        let args = HostArgs::new(1, 1, 1, 3);

        let mut short = [0u32; 2];
        assert_eq!(
            args.invoke_into(&mut short),
            Err(TausError::BufferLength {
                expected: 3,
                actual: 2
            })
        );

        let mut exact = [7u32; 3];
        args.invoke_into(&mut exact).unwrap();
        assert_eq!(exact, [1, 0, 0]);
    }

    #[test]
    fn test_zero_length_invocation() {
        let args = HostArgs::new(5, 6, 7, 0);
        assert!(args.invoke().unwrap().is_empty());
        args.invoke_into(&mut [0u32; 0]).unwrap();
    }

    #[test]
    fn test_skip_continues_stream() {
        let full = HostArgs::new(123456789, 362436069, 521288629, 5).invoke().unwrap();
        let tail = HostArgs::new(123456789, 362436069, 521288629, 3)
            .with_skip(2)
            .invoke()
            .unwrap();
        assert_eq!(tail, full[2..].to_vec());

        let mut buf = [0u32; 3];
        HostArgs::new(123456789, 362436069, 521288629, 3)
            .with_skip(2)
            .invoke_into(&mut buf)
            .unwrap();
        assert_eq!(buf.to_vec(), tail);
    }

    #[test]
    fn test_trace_text() {
        let args = HostArgs::new(1, 22, 333, 0).with_trace(true);
        assert_eq!(args.trace_seeds(), "Taus_URNG, seeds are 1 22 333");
    }
}
