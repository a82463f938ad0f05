//! 商品リスト（登録順の一覧）

use serde::{Deserialize, Serialize};

use crate::types::{NewProduct, Product, ProductId};

/// ID採番方式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum IdStrategy {
    /// 1から始まる単調増加カウンタ。削除後も再利用しない
    #[default]
    Monotonic,
    /// 現在の件数 + 1。削除後の追加でIDが重複しうる
    SizePlusOne,
}

impl std::str::FromStr for IdStrategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "monotonic" | "counter" => Ok(IdStrategy::Monotonic),
            "size-plus-one" | "size" => Ok(IdStrategy::SizePlusOne),
            _ => Err(format!("Unknown id strategy: {}. Use monotonic or size-plus-one", s)),
        }
    }
}

impl std::fmt::Display for IdStrategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IdStrategy::Monotonic => write!(f, "monotonic"),
            IdStrategy::SizePlusOne => write!(f, "size-plus-one"),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductList {
    products: Vec<Product>,
    strategy: IdStrategy,
    next_id: ProductId,
}

impl ProductList {
    pub fn new(strategy: IdStrategy) -> Self {
        Self {
            products: Vec::new(),
            strategy,
            next_id: 1,
        }
    }

    pub fn strategy(&self) -> IdStrategy {
        self.strategy
    }

    fn assign_id(&mut self) -> ProductId {
        match self.strategy {
            IdStrategy::Monotonic => {
                // Default 由来の 0 は 1 として扱う
                let id = self.next_id.max(1);
                self.next_id = id + 1;
                id
            }
            IdStrategy::SizePlusOne => self.products.len() as ProductId + 1,
        }
    }

    /// 末尾に追加して登録された商品を返す
    pub fn add(&mut self, candidate: NewProduct) -> &Product {
        let id = self.assign_id();
        tracing::info!(id, name = %candidate.name, "product added");
        self.products.push(Product::from_candidate(id, candidate));
        &self.products[self.products.len() - 1]
    }

    /// IDが一致する1件を削除。該当なしの場合は何もしない
    pub fn remove(&mut self, id: ProductId) -> Option<Product> {
        let Some(index) = self.products.iter().position(|p| p.id == id) else {
            tracing::debug!(id, "remove ignored: no such product");
            return None;
        };
        let removed = self.products.remove(index);
        tracing::info!(id, name = %removed.name, "product removed");
        Some(removed)
    }

    pub fn list_all(&self) -> &[Product] {
        &self.products
    }

    pub fn get(&self, id: ProductId) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn candidate(name: &str, price: f64) -> NewProduct {
        NewProduct {
            name: name.to_string(),
            price,
            image: None,
        }
    }

    fn ids(list: &ProductList) -> Vec<ProductId> {
        list.list_all().iter().map(|p| p.id).collect()
    }

    #[test]
    fn test_first_ids_are_one_and_two() {
        for strategy in [IdStrategy::Monotonic, IdStrategy::SizePlusOne] {
            let mut list = ProductList::new(strategy);
            assert_eq!(list.add(candidate("Pen", 10.0)).id, 1);
            assert_eq!(list.add(candidate("Book", 20.0)).id, 2);
        }
    }

    #[test]
    fn test_default_list_starts_at_one() {
        let mut list = ProductList::default();
        assert_eq!(list.add(candidate("Pen", 10.0)).id, 1);
        assert_eq!(list.add(candidate("Book", 20.0)).id, 2);
    }

    #[test]
    fn test_insertion_order_and_length() {
        let mut list = ProductList::new(IdStrategy::Monotonic);
        for (i, name) in ["a", "b", "c", "d"].iter().enumerate() {
            list.add(candidate(name, i as f64));
        }
        list.remove(2);
        let names: Vec<&str> = list.list_all().iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["a", "c", "d"]);
        assert_eq!(list.len(), 3);
    }

    #[test]
    fn test_remove_keeps_other_ids() {
        let mut list = ProductList::new(IdStrategy::Monotonic);
        list.add(candidate("a", 1.0));
        list.add(candidate("b", 2.0));
        list.add(candidate("c", 3.0));

        let removed = list.remove(2).expect("id 2 exists");
        assert_eq!(removed.name, "b");
        assert_eq!(ids(&list), vec![1, 3]);
    }

    #[test]
    fn test_remove_unknown_is_noop() {
        let mut list = ProductList::new(IdStrategy::Monotonic);
        list.add(candidate("a", 1.0));
        let before = list.clone();

        assert!(list.remove(42).is_none());
        assert_eq!(list, before);
    }

    #[test]
    fn test_size_plus_one_can_duplicate() {
        let mut list = ProductList::new(IdStrategy::SizePlusOne);
        list.add(candidate("a", 1.0));
        list.add(candidate("b", 2.0));
        list.remove(1);
        assert_eq!(list.add(candidate("c", 3.0)).id, 2);
        assert_eq!(ids(&list), vec![2, 2]);
    }

    #[test]
    fn test_monotonic_never_reuses() {
        let mut list = ProductList::new(IdStrategy::Monotonic);
        list.add(candidate("a", 1.0));
        list.add(candidate("b", 2.0));
        list.remove(2);
        list.remove(1);
        assert!(list.is_empty());
        assert_eq!(list.add(candidate("c", 3.0)).id, 3);
    }

    #[test]
    fn test_get() {
        let mut list = ProductList::new(IdStrategy::Monotonic);
        list.add(candidate("a", 1.0));
        assert_eq!(list.get(1).map(|p| p.name.as_str()), Some("a"));
        assert!(list.get(2).is_none());
    }

    #[test]
    fn test_id_strategy_from_str() {
        assert_eq!("size-plus-one".parse::<IdStrategy>(), Ok(IdStrategy::SizePlusOne));
        assert_eq!("Monotonic".parse::<IdStrategy>(), Ok(IdStrategy::Monotonic));
        assert!("random".parse::<IdStrategy>().is_err());
        assert_eq!(IdStrategy::SizePlusOne.to_string(), "size-plus-one");
    }
}
