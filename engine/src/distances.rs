use num_traits::float::Float;
use std::ops::AddAssign;

pub fn dot_product<V>(a: &[V], b: &[V]) -> V
where
    V: Float + AddAssign,
{
    let mut dot_prod = V::zero();
    for (x, y) in a.iter().zip(b) {
        dot_prod += (*x) * (*y);
    }

    dot_prod
}

pub fn norm<V>(a: &[V]) -> V
where
    V: Float + AddAssign,
{
    dot_product(a, a).sqrt()
}

/// Cosine of the angle between `a` and `b`, zero when either is a zero vector.
pub fn cosine_similarity<V>(a: &[V], b: &[V]) -> V
where
    V: Float + AddAssign,
{
    debug_assert_eq!(a.len(), b.len());

    let a_norm = norm(a);
    let b_norm = norm(b);
    if a_norm.is_zero() || b_norm.is_zero() {
        return V::zero();
    }

    let cos_sim = dot_product(a, b) / (a_norm * b_norm);
    if cos_sim.is_nan() || cos_sim.is_infinite() {
        V::zero()
    } else {
        cos_sim
    }
}

pub fn is_zero_vector<V: Float>(a: &[V]) -> bool {
    a.iter().all(|x| x.is_zero())
}
