/// 購物車單一商品列的 "+"/"-" 數量，最小為 0，沒有上限
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuantityControl {
    value: u32,
}

impl Default for QuantityControl {
    fn default() -> Self {
        Self { value: 1 }
    }
}

impl QuantityControl {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn value(&self) -> u32 {
        self.value
    }

    pub fn increase(&mut self) -> u32 {
        self.value = self.value.saturating_add(1);
        self.value
    }

    pub fn decrease(&mut self) -> u32 {
        self.value = self.value.saturating_sub(1);
        self.value
    }
}
