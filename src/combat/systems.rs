use super::*;
use crate::duel::MatchOutcome;

pub fn plugin(app: &mut App) {
    app.add_observer(on_hit);
}

/// Resolves an attack against the fighter it touched, once per attack.
fn on_hit(
    on: On<HitEvent>,
    outcome: Res<MatchOutcome>,
    mut attacks: Query<(&mut Attack, Option<&mut SpecialAttack>)>,
    mut defenders: Query<(&CharacterId, &mut PlayerState, &mut Health)>,
) {
    let event = on.event();
    if outcome.is_decided() {
        return;
    }
    let Ok((mut attack, special)) = attacks.get_mut(event.attack) else {
        return;
    };
    if attack.landed {
        return;
    }
    let Ok((id, mut state, mut health)) = defenders.get_mut(event.defender) else {
        return;
    };

    let verdict = judge(attack.action, &state);
    if verdict == Verdict::Ignored {
        return;
    }
    attack.landed = true;
    verdict.apply(&mut state, &mut health, id.data());
    if let Some(mut special) = special {
        special.explode = true;
    }

    debug!(
        "{:?} on {}: {verdict:?}, health {}",
        attack.action, event.defender, health.current
    );
}
