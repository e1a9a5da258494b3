//! Icosahedral dot distributions on unit and composite spheres.
//!
//! Point distribution follows the NSC approach: an icosahedron refined by
//! great-circle subdivision of its edges and faces, either directly
//! (10·tess² + 2 points) or through the pentakisdodecahedron
//! (30·tess² + 2 points), whichever wastes fewer points for the requested
//! density. For composite surfaces the unit distribution is scaled onto
//! every sphere and dots buried inside any other sphere are discarded.

use crate::vector::Vec3;
use std::f64::consts::PI;

const DP_TOL: f64 = 0.001;

fn torad(degrees: f64) -> f64 {
    degrees * PI / 180.0
}

/// Icosahedron circumscribed-cap radii.
fn rh() -> f64 {
    (1.0 - 2.0 * torad(72.0).cos()).sqrt() / (1.0 - torad(72.0).cos())
}

fn rg() -> f64 {
    torad(72.0).cos() / (1.0 - torad(72.0).cos())
}

/// The 12 unit icosahedron vertices.
fn icosahedron_vertices() -> Vec<Vec3> {
    let rh = rh();
    let rg = rg();
    vec![
        Vec3::new(0.0, 0.0, 1.0),
        Vec3::new(rh * torad(72.0).cos(), rh * torad(72.0).sin(), rg),
        Vec3::new(rh * torad(144.0).cos(), rh * torad(144.0).sin(), rg),
        Vec3::new(rh * torad(216.0).cos(), rh * torad(216.0).sin(), rg),
        Vec3::new(rh * torad(288.0).cos(), rh * torad(288.0).sin(), rg),
        Vec3::new(rh, 0.0, rg),
        Vec3::new(rh * torad(36.0).cos(), rh * torad(36.0).sin(), -rg),
        Vec3::new(rh * torad(108.0).cos(), rh * torad(108.0).sin(), -rg),
        Vec3::new(-rh, 0.0, -rg),
        Vec3::new(rh * torad(252.0).cos(), rh * torad(252.0).sin(), -rg),
        Vec3::new(rh * torad(324.0).cos(), rh * torad(324.0).sin(), -rg),
        Vec3::new(0.0, 0.0, -1.0),
    ]
}

/// Point at arc fraction div1/div2 of the great circle from x1 toward x2.
fn divarc(x1: &Vec3, x2: &Vec3, div1: usize, div2: usize) -> Result<Vec3, String> {
    let d = x1.cross(x2);
    let dd = d.norm();
    if dd < DP_TOL {
        return Err(format!("divarc: rotation axis of length {}.", dd));
    }
    let d1 = x1.norm_squared();
    if d1 < 0.5 {
        return Err(format!("divarc: vector 1 of square length {}.", d1));
    }
    let d2 = x2.norm_squared();
    if d2 < 0.5 {
        return Err(format!("divarc: vector 2 of square length {}.", d2));
    }

    let sine = dd / (d1 * d2).sqrt();
    let phi = if sine.abs() < 1.0 {
        sine.asin()
    } else if (sine.abs() - 1.0) < DP_TOL {
        0.5 * PI
    } else {
        return Err(format!("divarc: invalid sine value {}.", sine));
    };
    let phi = phi * div1 as f64 / div2 as f64;
    let (sphi, cphi) = (phi.sin(), phi.cos());
    let s = x1.dot(&d) / dd;

    let x = d.x * s * (1.0 - cphi) / dd + x1.x * cphi + (d.y * x1.z - x1.y * d.z) * sphi / dd;
    let y = d.y * s * (1.0 - cphi) / dd + x1.y * cphi + (d.z * x1.x - x1.z * d.x) * sphi / dd;
    let z = d.z * s * (1.0 - cphi) / dd + x1.z * cphi + (d.x * x1.y - x1.x * d.y) * sphi / dd;
    let out = Vec3::new(x, y, z);
    Ok(out / out.norm())
}

/// Interior points of the spherical triangle (i, j, k), by the
/// great-circle average construction.
fn refine_face(
    dots: &mut Vec<Vec3>,
    i: usize,
    j: usize,
    k: usize,
    tess: usize,
) -> Result<(), String> {
    // Copies: refinement appends to `dots` while the corners stay fixed.
    let (xi, xj, xk) = (dots[i], dots[j], dots[k]);
    for tl in 1..tess.saturating_sub(1) {
        let xji = divarc(&xj, &xi, tl, tess)?;
        let xki = divarc(&xk, &xi, tl, tess)?;
        for tl2 in 1..(tess - tl) {
            let xij = divarc(&xi, &xj, tl2, tess)?;
            let xkj = divarc(&xk, &xj, tl2, tess)?;
            let xik = divarc(&xi, &xk, tess - tl - tl2, tess)?;
            let xjk = divarc(&xj, &xk, tess - tl - tl2, tess)?;

            let x1 = divarc(&xki, &xji, tl2, tess - tl)?;
            let x2 = divarc(&xkj, &xij, tl, tess - tl2)?;
            let x3 = divarc(&xjk, &xik, tl, tl + tl2)?;
            let sum = x1 + x2 + x3;
            dots.push(sum / sum.norm());
        }
    }
    Ok(())
}

/// Dot distribution from arc-refined icosahedron faces: 10·tess² + 2
/// points for the smallest tess meeting the density.
pub fn ico_dot_arc(density: usize) -> Result<Vec<Vec3>, String> {
    let tess = ((density as f64 - 2.0) / 10.0).sqrt().ceil().max(1.0) as usize;
    let n_dot = 10 * tess * tess + 2;

    let mut dots = icosahedron_vertices();
    if tess > 1 {
        // Square of the icosahedron edge.
        let a = rh() * rh() * 2.0 * (1.0 - torad(72.0).cos());

        // Tessellation of the icosahedron edges.
        for i in 0..11 {
            for j in (i + 1)..12 {
                let d = (dots[i] - dots[j]).norm_squared();
                if (a - d).abs() > DP_TOL {
                    continue;
                }
                let (xi, xj) = (dots[i], dots[j]);
                for tl in 1..tess {
                    dots.push(divarc(&xi, &xj, tl, tess)?);
                }
            }
        }

        // Tessellation of the icosahedron faces.
        for i in 0..10 {
            for j in (i + 1)..11 {
                let d = (dots[i] - dots[j]).norm_squared();
                if (a - d).abs() > DP_TOL {
                    continue;
                }
                for k in (j + 1)..12 {
                    let d_ik = (dots[i] - dots[k]).norm_squared();
                    let d_jk = (dots[j] - dots[k]).norm_squared();
                    if (a - d_ik).abs() > DP_TOL || (a - d_jk).abs() > DP_TOL {
                        continue;
                    }
                    refine_face(&mut dots, i, j, k, tess)?;
                }
            }
        }
    }
    if dots.len() != n_dot {
        return Err(format!(
            "ico_dot_arc: {} dots generated, expected {}.",
            dots.len(),
            n_dot
        ));
    }
    Ok(dots)
}

/// Dot distribution from the pentakisdodecahedron: 30·tess² + 2 points
/// for the smallest tess meeting the density.
pub fn ico_dot_dod(density: usize) -> Result<Vec<Vec3>, String> {
    let tess = (((density as f64 - 2.0) / 30.0).sqrt().ceil()).max(1.0) as usize;
    let n_dot = 30 * tess * tess + 2;

    let mut dots = icosahedron_vertices();

    // Square of the icosahedron edge.
    let a = rh() * rh() * 2.0 * (1.0 - torad(72.0).cos());

    // The 20 dodecahedron vertices are the icosahedron face centers.
    for i in 0..10 {
        for j in (i + 1)..11 {
            let d = (dots[i] - dots[j]).norm_squared();
            if (a - d).abs() > DP_TOL {
                continue;
            }
            for k in (j + 1)..12 {
                let d_ik = (dots[i] - dots[k]).norm_squared();
                let d_jk = (dots[j] - dots[k]).norm_squared();
                if (a - d_ik).abs() > DP_TOL || (a - d_jk).abs() > DP_TOL {
                    continue;
                }
                let sum = dots[i] + dots[j] + dots[k];
                dots.push(sum / sum.norm());
            }
        }
    }

    if tess > 1 {
        // Square of the dodecahedron edge, and of the distance between
        // adjacent icosahedron and dodecahedron vertices.
        let adod = 4.0 * (torad(108.0).cos() - torad(120.0).cos()) / (1.0 - torad(120.0).cos());
        let ai_d = 2.0 * (1.0 - (1.0 - a / 3.0).sqrt());

        // Tessellation of the mixed edges.
        for i in 0..31 {
            let (j1, j2, threshold) = if i >= 12 { (i + 1, 32, adod) } else { (12, 32, ai_d) };
            for j in j1..j2 {
                let d = (dots[i] - dots[j]).norm_squared();
                if (threshold - d).abs() > DP_TOL {
                    continue;
                }
                let (xi, xj) = (dots[i], dots[j]);
                for tl in 1..tess {
                    dots.push(divarc(&xi, &xj, tl, tess)?);
                }
            }
        }

        // Tessellation of the pentakisdodecahedron faces.
        for i in 0..12 {
            for j in 12..31 {
                let d_ij = (dots[i] - dots[j]).norm_squared();
                if (ai_d - d_ij).abs() > DP_TOL {
                    continue;
                }
                for k in (j + 1)..32 {
                    let d_ik = (dots[i] - dots[k]).norm_squared();
                    let d_jk = (dots[j] - dots[k]).norm_squared();
                    if (ai_d - d_ik).abs() > DP_TOL || (adod - d_jk).abs() > DP_TOL {
                        continue;
                    }
                    refine_face(&mut dots, i, j, k, tess)?;
                }
            }
        }
    }
    if dots.len() != n_dot {
        return Err(format!(
            "ico_dot_dod: {} dots generated, expected {}.",
            dots.len(),
            n_dot
        ));
    }
    Ok(dots)
}

/// Unit-sphere distribution for the requested density, choosing the
/// refinement mode that wastes fewer points.
pub fn unit_sphere_dots(density: usize) -> Result<Vec<Vec3>, String> {
    let mut i1 = 1usize;
    while 10 * i1 * i1 + 2 < density {
        i1 += 1;
    }
    let mut i2 = 1usize;
    while 30 * i2 * i2 + 2 < density {
        i2 += 1;
    }
    if 10 * i1 * i1 - 2 < 30 * i2 * i2 - 2 {
        ico_dot_arc(density)
    } else {
        ico_dot_dod(density)
    }
}

/// Dotted surface of a single sphere, with its exact area.
pub fn spherical(radius: f64, density: usize) -> Result<(Vec<Vec3>, f64), String> {
    let dots = unit_sphere_dots(density)?
        .into_iter()
        .map(|d| d * radius)
        .collect();
    let area = 4.0 * PI * radius * radius;
    Ok((dots, area))
}

/// Dotted surface of a collection of spheres.
///
/// Unit dots are scaled by each sphere's radius around its center; dots
/// lying within any other sphere are discarded. The reported area is the
/// sum over spheres of 4π·a² times each sphere's exposed dot fraction.
pub fn general(
    positions: &[Vec3],
    radii: &[f64],
    density: usize,
) -> Result<(Vec<Vec3>, f64), String> {
    if positions.len() != radii.len() {
        return Err(format!(
            "{} positions and {} radii: lengths must match.",
            positions.len(),
            radii.len()
        ));
    }
    if positions.is_empty() {
        return Err("No spheres provided for dotted surface generation.".to_string());
    }
    if radii.iter().any(|&a| a <= 0.0) {
        return Err("All radii must be non-zero positive values.".to_string());
    }

    let unit = unit_sphere_dots(density)?;
    let n = unit.len() as f64;

    let mut dots = Vec::new();
    let mut area = 0.0;
    for (i, (center, &radius)) in positions.iter().zip(radii).enumerate() {
        let mut exposed = 0usize;
        for u in &unit {
            let p = center + &(*u * radius);
            let buried = positions
                .iter()
                .zip(radii)
                .enumerate()
                .any(|(j, (c, &a))| j != i && (p - *c).norm() <= a);
            if !buried {
                dots.push(p);
                exposed += 1;
            }
        }
        area += 4.0 * PI * radius * radius * exposed as f64 / n;
    }
    log::debug!("{} dots, {}: exposed area.", dots.len(), area);
    Ok((dots, area))
}
