use qsha_core::detect_available_providers;

pub fn run() -> i32 {
    let providers = detect_available_providers();
    println!("{} randomness provider(s) available:\n", providers.len());

    for provider in &providers {
        let info = provider.info();
        println!("  {:<14} {}", info.name, info.description);
        println!("  {:<14} {}", "", info.physics);
        println!();
    }

    println!("Select one with `qsha hash --provider <name>`.");
    0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn listing_always_succeeds() {
        assert_eq!(run(), 0);
    }
}
