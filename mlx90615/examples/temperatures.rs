use std::env;
use std::path::Path;
use std::thread::sleep;
use std::time::Duration;

use anyhow::{anyhow, Context};
use linux_embedded_hal::I2cdev;

use mlx90615::Mlx90615;

fn main() -> anyhow::Result<()> {
    let args: Vec<String> = env::args().collect();
    if args.len() < 2 || args.len() > 4 {
        return Err(anyhow!(
            "Usage: {} <I2C bus> [sensor address] [emissivity]",
            args[0]
        ));
    }
    let address: u8 = match args.get(2) {
        Some(arg) if arg.starts_with("0x") => {
            let hex_digits = arg.split_at(2).1;
            u8::from_str_radix(hex_digits, 16).context("Invalid hexadecimal address")?
        }
        Some(arg) => arg.parse().context("Invalid address")?,
        None => mlx90615::DEFAULT_ADDRESS,
    };
    let bus_path = Path::new(&args[1]);
    let bus = I2cdev::new(bus_path)
        .with_context(|| format!("Unable to open {}", bus_path.display()))?;
    let mut sensor: Mlx90615<_, f32> = Mlx90615::new(bus, address);
    if let Some(arg) = args.get(3) {
        let emissivity: f32 = arg.parse().context("Invalid emissivity")?;
        sensor
            .write_emissivity(emissivity)
            .map_err(|err| anyhow!("Unable to set emissivity: {}", err))?;
    }
    let emissivity = sensor
        .read_emissivity()
        .map_err(|err| anyhow!("Unable to read emissivity: {}", err))?;
    println!("Emissivity: {:.3}", emissivity);
    let delay = Duration::from_millis(500);
    loop {
        let ambient = sensor
            .read_raw_ambient()
            .map_err(|err| anyhow!("Unable to read ambient temperature: {}", err))?;
        let object = sensor
            .read_raw_object()
            .map_err(|err| anyhow!("Unable to read object temperature: {}", err))?;
        let flag = if ambient.error_flag() || object.error_flag() {
            " (flagged)"
        } else {
            ""
        };
        println!(
            "Ambient: {:6.2}°C  Object: {:6.2}°C{}",
            ambient.celsius::<f32>(),
            object.celsius::<f32>(),
            flag
        );
        sleep(delay);
    }
}
