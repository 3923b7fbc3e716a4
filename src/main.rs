#![cfg_attr(target_os = "none", no_std, no_main)]

#[cfg(target_os = "none")]
mod firmware;

#[cfg(not(target_os = "none"))]
fn main() {
    eprintln!("pendulum-telemetry runs on the STM32F767; build with `--target thumbv7em-none-eabihf`");
    std::process::exit(1);
}
