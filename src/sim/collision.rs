//! Bullet-vs-wall collision detection and response
//!
//! A bullet touches a wall when its distance to the wall's line drops below
//! `wall_width / 2 + bullet_radius`. The response replaces the bullet's
//! velocity with its mirror image about the wall normal.

use glam::Vec2;

use super::bullet::Bullet;
use super::wall::Wall;

/// Unit collision normal for a wall
///
/// Built from the slope `a` as `normalize((1, -1/a))`. The normal only
/// depends on the wall's direction, never on its offset. Vertical and
/// horizontal walls take the limiting axes instead of dividing by zero.
pub fn wall_normal(wall: &Wall) -> Vec2 {
    match wall.slope() {
        None => Vec2::X,
        Some(a) if a == 0.0 => Vec2::Y,
        Some(a) => Vec2::new(1.0, -1.0 / a).normalize_or_zero(),
    }
}

/// Mirror `velocity` about `normal`: n·(2·(n·v)) − v
///
/// Speed is preserved for a unit normal.
#[inline]
pub fn reflect_about_normal(velocity: Vec2, normal: Vec2) -> Vec2 {
    normal * (2.0 * normal.dot(velocity)) - velocity
}

/// Whether a bullet is within `threshold` of the wall line
#[inline]
pub fn bullet_touches_wall(bullet: &Bullet, wall: &Wall, threshold: f32) -> bool {
    wall.distance_to_point(bullet.location()) < threshold
}

/// Reflect every live bullet off every wall it touches
///
/// Walls are visited in order for each bullet; a bullet within range of two
/// walls is reflected twice. Returns the number of reflections.
pub fn resolve_wall_collisions(bullets: &mut [Bullet], walls: &[Wall], threshold: f32) -> usize {
    let mut reflections = 0;

    for bullet in bullets.iter_mut().filter(|b| b.is_alive()) {
        for wall in walls {
            if bullet_touches_wall(bullet, wall, threshold) {
                let reflected = reflect_about_normal(bullet.velocity(), wall_normal(wall));
                bullet.set_velocity(reflected);
                reflections += 1;
            }
        }
    }

    if reflections > 0 {
        log::trace!("{} bullet reflection(s)", reflections);
    }
    reflections
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::bullet::BulletLifetime;

    fn bullet_at(pos: Vec2, rotation: f32, speed: f32) -> Bullet {
        Bullet::new(
            pos,
            rotation,
            speed,
            BulletLifetime {
                ticks: 100,
                max_travel: None,
            },
        )
    }

    #[test]
    fn test_wall_normal_is_perpendicular() {
        let wall = Wall::from_slope_intercept(2.0, 5.0);
        let n = wall_normal(&wall);
        let dir = wall.end() - wall.start();
        assert!((n.length() - 1.0).abs() < 1e-6);
        assert!(n.dot(dir).abs() < 1e-5);
    }

    #[test]
    fn test_wall_normal_ignores_offset() {
        let a = wall_normal(&Wall::from_slope_intercept(0.5, 0.0));
        let b = wall_normal(&Wall::from_slope_intercept(0.5, 300.0));
        assert!((a - b).length() < 1e-6);
    }

    #[test]
    fn test_vertical_and_horizontal_normals() {
        assert_eq!(wall_normal(&Wall::vertical(3.0)), Vec2::X);
        let flat = Wall::new(Vec2::new(0.0, 10.0), Vec2::new(5.0, 10.0));
        assert_eq!(wall_normal(&flat), Vec2::Y);
    }

    #[test]
    fn test_reflect_formula() {
        // Normal along +x: the normal component is kept, the tangent flips
        let r = reflect_about_normal(Vec2::new(3.0, 4.0), Vec2::X);
        assert!((r - Vec2::new(3.0, -4.0)).length() < 1e-6);
    }

    #[test]
    fn test_reflect_preserves_speed() {
        let normal = wall_normal(&Wall::from_slope_intercept(-0.7, 12.0));
        let v = Vec2::new(4.2, -1.3);
        let r = reflect_about_normal(v, normal);
        assert!((r.length() - v.length()).abs() < 1e-4);
    }

    #[test]
    fn test_resolve_only_within_threshold() {
        let wall = Wall::vertical(100.0);
        let mut bullets = vec![
            bullet_at(Vec2::new(95.0, 50.0), 0.0, 5.0),
            bullet_at(Vec2::new(50.0, 50.0), 0.0, 5.0),
        ];
        let count = resolve_wall_collisions(&mut bullets, &[wall], 9.0);
        assert_eq!(count, 1);
        // Near bullet mirrored about the x axis (no y component, unchanged)
        assert!((bullets[0].velocity() - Vec2::new(5.0, 0.0)).length() < 1e-5);
        assert!((bullets[1].velocity() - Vec2::new(5.0, 0.0)).length() < 1e-5);
    }

    #[test]
    fn test_two_walls_reflect_twice() {
        let walls = [
            Wall::new(Vec2::new(0.0, 10.0), Vec2::new(100.0, 10.0)),
            Wall::vertical(10.0),
        ];
        let mut bullets = vec![bullet_at(Vec2::new(12.0, 12.0), 0.5, 5.0)];
        let v = bullets[0].velocity();
        let count = resolve_wall_collisions(&mut bullets, &walls, 9.0);
        assert_eq!(count, 2);

        let expected = reflect_about_normal(reflect_about_normal(v, Vec2::Y), Vec2::X);
        assert!((bullets[0].velocity() - expected).length() < 1e-5);
    }

    #[test]
    fn test_dead_bullets_skipped() {
        let mut bullets = vec![bullet_at(Vec2::new(100.0, 1.0), 0.0, 5.0)];
        bullets[0].expire();
        let count = resolve_wall_collisions(&mut bullets, &[Wall::vertical(100.0)], 9.0);
        assert_eq!(count, 0);
    }
}
