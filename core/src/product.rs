#[derive(Clone, Debug, PartialEq)]
pub struct Product {
    pub id: String,
    pub name: String,
    pub price: f64,
    pub image_src: String,
}

pub fn format_price(price: f64) -> String {
    format!("${:.2}", price)
}
