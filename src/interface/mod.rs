pub mod export;
pub mod prompts;
pub mod render;
pub mod units;

pub use export::write_breakdown_csv;
pub use prompts::{
    match_ingredients, parse_decimal, price_from_input, prompt_ingredient, prompt_price,
    resolve_ingredient_name,
};
pub use render::{display_breakdown, display_parameters, display_prices, format_money};
pub use units::{display_unit_label, from_display_price, to_display_price};
