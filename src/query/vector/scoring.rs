//! Similarity score functions
//!
//! Each function consumes the query/document weight pairs of one
//! document, one pair per query token in sequence.

/// Euclidean distance between the query and document weight vectors.
/// Lower is better.
pub fn euclidean_distance(pairs: &[(f64, f64)]) -> f64 {
    pairs
        .iter()
        .map(|(q, d)| (q - d).powi(2))
        .sum::<f64>()
        .sqrt()
}

/// Inner product of the query and document weight vectors
pub fn inner_product(pairs: &[(f64, f64)]) -> f64 {
    pairs.iter().map(|(q, d)| q * d).sum()
}

/// Cosine of the angle between the vectors, restricted to query terms.
/// 0 when either norm is 0.
pub fn cosine(pairs: &[(f64, f64)]) -> f64 {
    let product = inner_product(pairs);
    let query_norm = pairs.iter().map(|(q, _)| q * q).sum::<f64>().sqrt();
    let doc_norm = pairs.iter().map(|(_, d)| d * d).sum::<f64>().sqrt();

    if query_norm != 0.0 && doc_norm != 0.0 {
        product / (query_norm * doc_norm)
    } else {
        0.0
    }
}

/// Dice coefficient: `2 * inner / (‖doc‖² + ‖query‖²)`. 0 when either
/// norm is 0.
pub fn dice(pairs: &[(f64, f64)]) -> f64 {
    let product = inner_product(pairs);
    let query_sq = pairs.iter().map(|(q, _)| q * q).sum::<f64>();
    let doc_sq = pairs.iter().map(|(_, d)| d * d).sum::<f64>();

    if query_sq != 0.0 && doc_sq != 0.0 {
        2.0 * product / (doc_sq + query_sq)
    } else {
        0.0
    }
}

/// Jaccard coefficient: `inner / (‖doc‖² + ‖query‖² − inner)`. 0 when
/// either norm is 0.
pub fn jaccard(pairs: &[(f64, f64)]) -> f64 {
    let product = inner_product(pairs);
    let query_sq = pairs.iter().map(|(q, _)| q * q).sum::<f64>();
    let doc_sq = pairs.iter().map(|(_, d)| d * d).sum::<f64>();

    if query_sq != 0.0 && doc_sq != 0.0 {
        product / (doc_sq + query_sq - product)
    } else {
        0.0
    }
}
