// Combined Tausworthe generator with three LFSR components (L'Ecuyer style
// taus88 parameters). All shifts are on u32: left-shift overflow is discarded
// and right shifts zero-fill, which is exactly the 32-bit register semantics.

use crate::error::TausError;

const MASK0: u32 = 0xFFFF_FFFE;
const MASK1: u32 = 0xFFFF_FFF8;
const MASK2: u32 = 0xFFFF_FFF0;

/// Scale factor mapping a 32-bit word onto `[0, 1)`.
const UNIT_SCALE: f64 = 1.0 / 4_294_967_296.0;

/// Snapshot of the three generator registers.
///
/// A plain value: copying it forks the stream, and restoring it through
/// [`Taus88::from_state`] continues exactly where the snapshot was taken.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct TausState {
    pub s0: u32,
    pub s1: u32,
    pub s2: u32,
}

impl TausState {
    pub const fn new(s0: u32, s1: u32, s2: u32) -> Self {
        Self { s0, s1, s2 }
    }

    /// The combined output word for this state.
    #[inline]
    pub const fn output(self) -> u32 {
        self.s0 ^ self.s1 ^ self.s2
    }

    /// One lock-step transition. Every register reads only its own old value,
    /// so the three updates are independent of each other.
    #[inline]
    pub const fn step(self) -> Self {
        Self {
            s0: advance_s0(self.s0),
            s1: advance_s1(self.s1),
            s2: advance_s2(self.s2),
        }
    }
}

#[inline]
const fn advance_s0(s: u32) -> u32 {
    let b = ((s << 13) ^ s) >> 19;
    ((s & MASK0) << 12) ^ b
}

#[inline]
const fn advance_s1(s: u32) -> u32 {
    let b = ((s << 2) ^ s) >> 25;
    ((s & MASK1) << 4) ^ b
}

#[inline]
const fn advance_s2(s: u32) -> u32 {
    let b = ((s << 3) ^ s) >> 11;
    ((s & MASK2) << 17) ^ b
}

/// One register's transition as a GF(2) matrix: entry `i` is the image of bit `i`.
type Gf2Matrix = [u32; 32];

fn transition_matrix(advance: fn(u32) -> u32) -> Gf2Matrix {
    std::array::from_fn(|i| advance(1 << i))
}

fn apply(m: &Gf2Matrix, s: u32) -> u32 {
    let mut out = 0;
    let mut bits = s;
    while bits != 0 {
        out ^= m[bits.trailing_zeros() as usize];
        bits &= bits - 1;
    }
    out
}

fn square(m: &Gf2Matrix) -> Gf2Matrix {
    std::array::from_fn(|i| apply(m, m[i]))
}

/// Advance one register `count` steps by square-and-multiply over its
/// transition matrix. Cost is logarithmic in `count`.
fn jump_register(advance: fn(u32) -> u32, s: u32, count: u64) -> u32 {
    let mut m = transition_matrix(advance);
    let mut s = s;
    let mut n = count;
    while n != 0 {
        if n & 1 == 1 {
            s = apply(&m, s);
        }
        n >>= 1;
        if n != 0 {
            m = square(&m);
        }
    }
    s
}

/// Three-component Tausworthe generator.
///
/// Each call to [`next_u32`](Self::next_u32) emits the XOR of the current
/// registers and then advances all three. Seeds are taken verbatim; a zero
/// seed (or a seed with only masked-off low bits set) collapses that
/// register to zero, which is accepted rather than repaired.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Taus88 {
    state: TausState,
}

impl Taus88 {
    pub fn new(seed0: u32, seed1: u32, seed2: u32) -> Self {
        Self {
            state: TausState::new(seed0, seed1, seed2),
        }
    }

    pub fn from_seeds(seeds: [u32; 3]) -> Self {
        Self::new(seeds[0], seeds[1], seeds[2])
    }

    /// Emit the next word, then advance the registers.
    #[inline]
    pub fn next_u32(&mut self) -> u32 {
        let word = self.state.output();
        self.state = self.state.step();
        word
    }

    /// Uniform draw in `[0, 1)` built from one 32-bit word.
    #[inline]
    pub fn next_f64(&mut self) -> f64 {
        to_unit_f64(self.next_u32())
    }

    /// Fill a caller-provided buffer, one word per slot, in generation order.
    pub fn fill(&mut self, out: &mut [u32]) {
        for slot in out.iter_mut() {
            *slot = self.next_u32();
        }
    }

    /// Advance past `count` words without emitting them.
    ///
    /// Every register update is linear over GF(2), so this jumps by matrix
    /// powers instead of stepping; any `u64` count finishes in bounded time.
    pub fn skip(&mut self, count: u64) {
        let TausState { s0, s1, s2 } = self.state;
        self.state = TausState {
            s0: jump_register(advance_s0, s0, count),
            s1: jump_register(advance_s1, s1, count),
            s2: jump_register(advance_s2, s2, count),
        };
    }

    /// Capture the current registers for later restoration.
    pub fn capture_state(&self) -> TausState {
        self.state
    }

    /// Resume a stream from a captured state.
    pub fn from_state(state: TausState) -> Self {
        Self { state }
    }

    /// Draw the next `n` words into a newly allocated vector, reporting a
    /// failed allocation instead of aborting.
    pub fn try_take(&mut self, n: u32) -> Result<Vec<u32>, TausError> {
        let mut out = Vec::new();
        reserve_words(&mut out, n as usize, n)?;
        out.resize(n as usize, 0);
        self.fill(&mut out);
        Ok(out)
    }
}

/// Reserve exactly `n` more words. `len` is the requested length reported on failure.
fn reserve_words(out: &mut Vec<u32>, n: usize, len: u32) -> Result<(), TausError> {
    out.try_reserve_exact(n)
        .map_err(|_| TausError::OutputAllocationFailure { len })
}

/// Map a word onto `[0, 1)` as `word * 2^-32`.
#[inline]
pub fn to_unit_f64(word: u32) -> f64 {
    f64::from(word) * UNIT_SCALE
}

/// Produce `n` words from the given seeds.
///
/// `n == 0` returns an empty vector and never touches the registers.
pub fn generate(seed0: u32, seed1: u32, seed2: u32, n: u32) -> Vec<u32> {
    let mut out = vec![0u32; n as usize];
    Taus88::new(seed0, seed1, seed2).fill(&mut out);
    out
}

/// Like [`generate`], but reports a failed output allocation instead of
/// aborting. There is no fallback to a shorter sequence.
pub fn try_generate(seed0: u32, seed1: u32, seed2: u32, n: u32) -> Result<Vec<u32>, TausError> {
    Taus88::new(seed0, seed1, seed2).try_take(n)
}
