// ============================================================================
// Basic Usage Example
// ============================================================================

use fixnorm::prelude::*;

fn main() {
    #[cfg(feature = "logging")]
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .init();

    println!("=== Fixed-Point Example ===\n");

    let sample = Fixed32::from_real(19.99f64);
    let gain = Fixed32::from_real(3i32);
    let total = sample * gain;
    println!("{:?} * {:?} = {:?}", sample, gain, total);
    println!("Total as f64: {}", total.to_real());
    println!("Total truncated to integer: {}", total.to::<i32>());

    // Narrow 4-bit fraction storage
    let coarse = Fixed8::from_real(1.53f32);
    println!("\n1.53 stored with 4 fractional bits: {:?}", coarse);
    println!("Fixed8 range: [{}, {}]", Fixed8::min_value(), Fixed8::max_value());

    // Wrapping operators and the checked alternative
    let wrapped = Fixed8::MAX + Fixed8::EPSILON;
    println!("Fixed8::MAX + EPSILON wraps to {:?}", wrapped);
    match Fixed8::MAX.checked_add(Fixed8::EPSILON) {
        Ok(value) => println!("checked_add: {:?}", value),
        Err(error) => println!("checked_add: {}", error),
    }

    println!("\n=== Normalized Example ===\n");

    let level = Norm16::from_real(0.75f32);
    let boosted = level * 2i32;
    println!("{:?} * 2 saturates to {:?}", level, boosted);

    let alpha = UNorm8::from_real(0.75f32);
    println!("{:?} - 0.5 = {:?}", alpha, alpha + -0.5f32);

    let n = Norm8::from_base(100);
    println!("Norm8(100) + Norm8(100) = {:?}", n + n);
    println!("Norm8 range: [{}, {}]", Norm8::min_value(), Norm8::max_value());

    let half = UNorm8::from_real(0.5f32);
    let inverted: f32 = -half;
    println!("-{:?} = {} (unsigned negation yields a real)", half, inverted);

    match Norm8::MAX.checked_div(Norm8::ZERO) {
        Ok(value) => println!("checked_div: {:?}", value),
        Err(error) => println!("checked_div: {}", error),
    }

    println!("\n=== Conversions ===\n");

    let coarse_total: Fixed16 = total.convert();
    println!("Fixed32 -> Fixed16: {:?}", coarse_total);

    let quarter: UNorm16 = Fixed16::from_real(0.25f32).convert();
    println!("Fixed16 -> UNorm16: {:?}", quarter);

    let back: Fixed32 = quarter.convert();
    println!("UNorm16 -> Fixed32: {:?}", back);

    println!("\n=== Classification ===\n");
    println!("is_fixed_point::<Fixed16>() = {}", is_fixed_point::<Fixed16>());
    println!("is_fixed_point::<f32>()     = {}", is_fixed_point::<f32>());
    println!("is_integral::<UNorm8>()     = {}", is_integral::<UNorm8>());
    println!("is_integral::<f64>()        = {}", is_integral::<f64>());
}
