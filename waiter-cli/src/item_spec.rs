//! `--item` argument syntax
//!
//! `FOOD[ xQTY][:OPTION[ xQTY],OPTION[ xQTY]...]`, e.g. `nasi x2:telur,sambal x3`.
//! Quantities default to 1; the `x` must follow a space.

use std::str::FromStr;

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ItemSpecError {
    #[error("empty item")]
    Empty,

    #[error("invalid quantity '{0}'")]
    Quantity(String),
}

/// One requested menu line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemSpec {
    pub food: String,
    pub quantity: u32,
    pub options: Vec<OptionSpec>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionSpec {
    pub option: String,
    pub quantity: u32,
}

/// Split `name xN` into name and quantity
fn name_and_quantity(text: &str) -> Result<(String, u32), ItemSpecError> {
    let text = text.trim();
    let (name, quantity) = match text.rsplit_once('x') {
        Some((name, qty))
            if name.ends_with(char::is_whitespace)
                && !qty.is_empty()
                && qty.chars().all(|c| c.is_ascii_digit()) =>
        {
            let quantity = qty
                .parse::<u32>()
                .ok()
                .filter(|q| *q >= 1)
                .ok_or_else(|| ItemSpecError::Quantity(qty.to_string()))?;
            (name.trim(), quantity)
        }
        _ => (text, 1),
    };

    if name.is_empty() {
        return Err(ItemSpecError::Empty);
    }
    Ok((name.to_string(), quantity))
}

impl FromStr for ItemSpec {
    type Err = ItemSpecError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (food, options) = match s.split_once(':') {
            Some((food, options)) => (food, Some(options)),
            None => (s, None),
        };
        let (food, quantity) = name_and_quantity(food)?;

        let options = options
            .into_iter()
            .flat_map(|o| o.split(','))
            .filter(|o| !o.trim().is_empty())
            .map(|o| name_and_quantity(o).map(|(option, quantity)| OptionSpec { option, quantity }))
            .collect::<Result<_, _>>()?;

        Ok(Self {
            food,
            quantity,
            options,
        })
    }
}
