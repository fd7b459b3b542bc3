/// Nice tick values covering `[min, max]` without leaving it.
///
/// Steps are powers of ten times 1, 2 or 5, chosen so roughly `count` ticks fit.
#[must_use]
pub fn nice_ticks(mut min: f64, mut max: f64, count: usize) -> Vec<f64> {
    if count == 0 || !min.is_finite() || !max.is_finite() {
        return Vec::new();
    }
    if min == max {
        return vec![min];
    }
    if min > max {
        std::mem::swap(&mut min, &mut max);
    }

    let step = nice_step((max - min) / count as f64);
    if step == 0.0 {
        return vec![min, max];
    }

    // Integer tick indices keep the values free of accumulated float error.
    if step >= 1.0 {
        let first = (min / step).ceil();
        let last = (max / step).floor();
        index_range(first, last)
            .map(|i| i * step)
            .collect()
    } else {
        let inverse = (1.0 / step).round();
        let first = (min * inverse).ceil();
        let last = (max * inverse).floor();
        index_range(first, last)
            .map(|i| i / inverse)
            .collect()
    }
}

fn index_range(first: f64, last: f64) -> impl Iterator<Item = f64> {
    let n = (last - first).round();
    let n = if n.is_finite() && n >= 0.0 {
        n.min(10_000.0) as u64
    } else {
        0
    };
    let empty = last < first;
    (0..=n)
        .filter(move |_| !empty)
        .map(move |i| first + i as f64)
}

/// Rounds a raw step to 1, 2, 5 or 10 times a power of ten.
#[must_use]
pub fn nice_step(step: f64) -> f64 {
    if !step.is_finite() || step <= 0.0 {
        return 0.0;
    }
    let power = step.log10().floor();
    let base = 10_f64.powf(power);
    let error = step / base;
    let nice = if error >= 50_f64.sqrt() {
        10.0
    } else if error >= 10_f64.sqrt() {
        5.0
    } else if error >= 2_f64.sqrt() {
        2.0
    } else {
        1.0
    };
    nice * base
}

/// Formats a tick value with thousands grouping and just enough decimals for `step`.
#[must_use]
pub fn format_tick(value: f64, step: f64) -> String {
    if !value.is_finite() {
        return value.to_string();
    }

    let decimals = if step.is_finite() && step > 0.0 {
        (-step.log10().floor()).max(0.0) as usize
    } else {
        0
    };

    let raw = format!("{:.*}", decimals, value.abs());
    let (integer, fraction) = match raw.split_once('.') {
        Some((integer, fraction)) => (integer, Some(fraction)),
        None => (raw.as_str(), None),
    };

    let mut grouped = String::with_capacity(raw.len() + integer.len() / 3 + 1);
    let is_zero = raw.chars().all(|c| c == '0' || c == '.');
    if value < 0.0 && !is_zero {
        grouped.push('-');
    }
    for (i, digit) in integer.chars().enumerate() {
        if i > 0 && (integer.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    if let Some(fraction) = fraction {
        grouped.push('.');
        grouped.push_str(fraction);
    }
    grouped
}
