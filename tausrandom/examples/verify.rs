use tausrandom::host::parse_scalar;
use tausrandom::Taus88;

fn main() {
    let args: Vec<String> = std::env::args().collect();

    let seed = |i: usize, default: u32| {
        args.get(i)
            .and_then(|s| parse_scalar(s))
            .unwrap_or(default)
    };
    let seeds = [seed(1, 123456789), seed(2, 362436069), seed(3, 521288629)];

    let count: usize = args.get(4).and_then(|s| s.parse().ok()).unwrap_or(20);

    let mut rng = Taus88::from_seeds(seeds);

    for _ in 0..count {
        println!("{}", rng.next_u32());
    }
}
