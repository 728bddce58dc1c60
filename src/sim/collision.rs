//! Contact resolution between players and the ball
//!
//! Two zones per player: the body circle ("head") and a smaller foot circle
//! hanging under it. The head gives a soft fixed impulse, the foot delivers
//! the kick. Players themselves collide as circles and shove each other.

use crate::consts::*;

use super::state::{Ball, Player};

/// Which contact zone fired for a player this tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Contact {
    Head,
    Foot,
}

/// Resolve one player against the ball. Head is checked first; the foot only
/// fires when the head did not, so the zones are mutually exclusive per tick.
/// Only the ball's velocity changes.
pub fn player_ball(player: &Player, ball: &mut Ball) -> Option<Contact> {
    let head_delta = ball.pos - player.center();
    if head_delta.length() < ball.radius + player.width / 2.0 {
        let dir = head_delta.normalize_or_zero();
        ball.vel = dir * HEAD_FORCE;
        ball.vel.y -= HEAD_LIFT;
        return Some(Contact::Head);
    }

    let foot_delta = ball.pos - player.foot();
    if foot_delta.length() < ball.radius + FOOT_REACH {
        let power = if player.kicking {
            KICK_POWER_ACTIVE
        } else {
            KICK_POWER_PASSIVE
        };
        let dir = foot_delta.normalize_or_zero();
        ball.vel = dir * (KICK_FORCE * power);
        ball.vel.y -= KICK_LIFT;

        if player.kicking {
            ball.vel.x *= KICK_BOOST;
            ball.vel.y -= KICK_LIFT;
        }
        return Some(Contact::Foot);
    }

    None
}

/// Separate two overlapping players 50/50 along the line between their
/// centers. A kicking player also shoves the other one toward their facing
/// direction and pops them upward.
pub fn separate_players(a: &mut Player, b: &mut Player) {
    let delta = a.center() - b.center();
    let distance = delta.length();
    let min_distance = (a.width + b.width) / 2.0;

    if distance < min_distance && distance > 0.0 {
        let overlap = min_distance - distance;
        let push = delta / distance * (overlap * 0.5);
        a.pos += push;
        b.pos -= push;

        let shove = PLAYER_PUSH_FORCE * 0.5;
        if a.kicking {
            b.vel.x += if a.facing_right { shove } else { -shove };
            b.vel.y = (b.vel.y - 2.0).min(-3.0);
        }
        if b.kicking {
            a.vel.x += if b.facing_right { shove } else { -shove };
            a.vel.y = (a.vel.y - 2.0).min(-3.0);
        }
    }
}

#[cfg(test)]
mod tests {
    use glam::Vec2;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    use super::*;
    use crate::roster::Character;
    use crate::sim::state::Side;

    fn player_at(x: f32, y: f32) -> Player {
        let character = Character::new("p", "P", "p.png");
        let mut player = Player::new(&character, Side::Left);
        player.pos = Vec2::new(x, y);
        player
    }

    fn ball_at(x: f32, y: f32) -> Ball {
        let mut ball = Ball::serve(&mut Pcg32::seed_from_u64(1));
        ball.pos = Vec2::new(x, y);
        ball.vel = Vec2::ZERO;
        ball
    }

    #[test]
    fn test_head_contact_low_impulse() {
        let player = player_at(100.0, 200.0);
        // Ball just right of the body center
        let mut ball = ball_at(player.center().x + 20.0, player.center().y);

        let contact = player_ball(&player, &mut ball);

        assert_eq!(contact, Some(Contact::Head));
        assert!((ball.vel.x - HEAD_FORCE).abs() < 1e-4);
        assert!((ball.vel.y - (-HEAD_LIFT)).abs() < 1e-4);
    }

    #[test]
    fn test_foot_contact_outranges_head() {
        let player = player_at(100.0, 200.0);
        // Below the body box, outside the head circle but inside foot reach
        let foot = player.foot();
        let mut ball = ball_at(foot.x, foot.y + 30.0);

        let contact = player_ball(&player, &mut ball);

        assert_eq!(contact, Some(Contact::Foot));
        // Straight-down contact: passive kick sends it down plus lift
        let force = KICK_FORCE * KICK_POWER_PASSIVE;
        assert!((ball.vel.y - (force - KICK_LIFT)).abs() < 1e-4);
    }

    #[test]
    fn test_active_kick_hits_harder() {
        let passive_player = player_at(100.0, 200.0);
        let mut active_player = player_at(100.0, 200.0);
        active_player.kicking = true;

        let foot = passive_player.foot();
        let mut slow = ball_at(foot.x + 25.0, foot.y);
        let mut fast = ball_at(foot.x + 25.0, foot.y);

        assert_eq!(player_ball(&passive_player, &mut slow), Some(Contact::Foot));
        assert_eq!(player_ball(&active_player, &mut fast), Some(Contact::Foot));

        assert!(fast.vel.x > slow.vel.x);
        assert!(fast.vel.y < slow.vel.y);
    }

    #[test]
    fn test_no_contact_out_of_range() {
        let player = player_at(100.0, 200.0);
        let mut ball = ball_at(400.0, 100.0);
        let before = ball.vel;

        assert_eq!(player_ball(&player, &mut ball), None);
        assert_eq!(ball.vel, before);
    }

    #[test]
    fn test_overlapping_players_separate_evenly() {
        let mut a = player_at(100.0, GROUND_Y - PLAYER_HEIGHT);
        let mut b = player_at(120.0, GROUND_Y - PLAYER_HEIGHT);

        separate_players(&mut a, &mut b);

        // Centers were 20 apart with a 40 minimum, so each moves 10 out
        assert!((a.pos.x - 90.0).abs() < 1e-4);
        assert!((b.pos.x - 130.0).abs() < 1e-4);
    }

    #[test]
    fn test_kicker_knocks_back() {
        let mut kicker = player_at(100.0, GROUND_Y - PLAYER_HEIGHT);
        kicker.kicking = true;
        kicker.facing_right = true;
        let mut victim = player_at(120.0, GROUND_Y - PLAYER_HEIGHT);

        separate_players(&mut kicker, &mut victim);

        assert!(victim.vel.x > 0.0);
        assert!(victim.vel.y <= -3.0);
        assert_eq!(kicker.vel.x, 0.0);
    }

    #[test]
    fn test_no_separation_without_overlap() {
        let mut a = player_at(100.0, GROUND_Y - PLAYER_HEIGHT);
        let mut b = player_at(300.0, GROUND_Y - PLAYER_HEIGHT);

        separate_players(&mut a, &mut b);

        assert_eq!(a.pos.x, 100.0);
        assert_eq!(b.pos.x, 300.0);
    }
}
