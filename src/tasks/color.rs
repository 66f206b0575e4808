use anyhow::Result;
use log::error;
use plotters::prelude::RGBColor;

pub static FONT_SIZE: i32 = 18;
pub static STROKE_WIDTH: u32 = 2;

pub static CONTROL_OPACITY: f64 = 0.4;
pub static SCENARIO_OPACITY: f64 = 0.9;

pub fn get_color_from_label(label: &str) -> Result<RGBColor> {
    match label {
        "control" => Ok(RGBColor(0x88, 0x88, 0x88)),
        "balanced" => Ok(RGBColor(0x1f, 0x77, 0xb4)),
        "moderate" => Ok(RGBColor(0x2c, 0xa0, 0x2c)),
        "short" => Ok(RGBColor(0xff, 0x7f, 0x0e)),
        "aggressive" => Ok(RGBColor(0xd6, 0x27, 0x28)),
        "very_aggressive" => Ok(RGBColor(0x94, 0x67, 0xbd)),
        "light-grey" => Ok(RGBColor(0xcc, 0xcc, 0xcc)),
        _ => {
            error!("unrecognized label for color (label={label})");
            anyhow::bail!("unrecognized label (label={label})");
        }
    }
}
