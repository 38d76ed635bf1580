use crate::domain::model::Product;

/// 依標題做區分大小寫的子字串比對；空字串回傳全部商品。
/// 結果借用輸入並保留原本順序。
pub fn filter_products<'a>(products: &'a [Product], search: &str) -> Vec<&'a Product> {
    if search.is_empty() {
        return products.iter().collect();
    }
    products
        .iter()
        .filter(|product| product.title.contains(search))
        .collect()
}
