// ============================================================================
// Basic Usage Example
// ============================================================================

use checked_math::prelude::*;

fn main() {
    #[cfg(feature = "logging")]
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .init();

    println!("=== Checked Math Example ===\n");

    // Ordinary arithmetic just works
    println!("Arithmetic:");
    report("1.5 + 2.25", checked_add(1.5, 2.25));
    report("10 - 4.5", checked_sub(10.0, 4.5));
    report("3 * 7", checked_mul(3.0, 7.0));
    report("1 / 8", checked_div(1.0, 8.0));

    // Powers and factorials
    println!("\nPowers and factorials:");
    report("2^10", checked_pow(2.0, 10));
    report("2^-3", checked_pow(2.0, -3));
    report("5!", checked_factorial(5.0));
    report("170!", checked_factorial(FACTORIAL_MAX_N));

    // Conditions the raw operators would hide
    println!("\nRejected operations:");
    report("MAX + MAX", checked_add(f64::MAX, f64::MAX));
    report("MAX / 0.5", checked_div(f64::MAX, 0.5));
    report("1 / 0", checked_div(1.0, 0.0));
    report("0^-1", checked_pow(0.0, -1));
    report("2^0.5", checked_powf(2.0, 0.5));
    report("(-1)!", checked_factorial(-1.0));
    report("171!", checked_factorial(171.0));
}

fn report(label: &str, result: MathResult) {
    let status = Status::of(&result);
    match result {
        Ok(value) => println!("  {:>10} = {:<25e} [{}]", label, value, status),
        Err(_) => println!("  {:>10} : {}", label, status),
    }
}
