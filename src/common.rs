use std::{collections::HashMap, hash::Hash};

pub fn norm_1<K: Hash + Eq>(v: &HashMap<K, f64, ahash::RandomState>) -> f64 {
    v.values().map(|x| x.abs()).sum()
}
