//! # Update Dump
//!
//! Builds a sample player, encodes its create block and a follow-up partial
//! update, and prints both as hex. Handy for diffing against captures.
//!
//! Usage: `update_dump [config.toml]`

use ember_replication::{
    install_global, register_builtin_schemas, LivingData, LivingMovement, MovementBlock,
    MovementSpeeds, Player, ReplicationConfig, ReplicationResult, UpdateBatch, UpdateBlock,
};
use ember_shared::{Guid, Vector4};
use tracing_subscriber::{prelude::*, registry::Registry, EnvFilter};

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    Registry::default()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}

fn hex(bytes: &[u8]) -> String {
    bytes.iter().map(|b| format!("{b:02X}")).collect::<Vec<_>>().join(" ")
}

fn run() -> ReplicationResult<()> {
    let config = match std::env::args().nth(1) {
        Some(path) => ReplicationConfig::load(path)?,
        None => ReplicationConfig::default(),
    };
    install_global(config)?;
    register_builtin_schemas()?;

    let guid = Guid::new(0x0000_0000_0000_0001);
    let mut player = Player::new(guid);
    {
        let unit = player.unit_mut();
        unit.set_race(1);
        unit.set_class(1);
        unit.set_power_type(1);
        unit.set_health(100);
        unit.set_max_health(100);
        unit.set_level(1);
        unit.set_faction_template(1);
        unit.set_display_id(49);
        unit.set_native_display_id(49);
        unit.set_bounding_radius(0.389);
        unit.set_combat_reach(1.5);
    }

    let mut movement = MovementBlock::living(LivingMovement::new(LivingData {
        timestamp: 0,
        pose: Vector4::new(-8949.95, -132.493, 83.5312, 0.0),
        fall_time: 0.0,
        speeds: MovementSpeeds::DEFAULT,
    }));
    movement.set_self(true);

    let create: UpdateBatch = [UpdateBlock::Create {
        guid,
        object_type: Player::OBJECT_TYPE,
        movement,
        values: player.marshal(false),
        spawned: false,
    }]
    .into_iter()
    .collect();
    let create = create.encode();
    tracing::info!(bytes = create.len(), "create batch");
    println!("create:  {}", hex(&create));

    player.unit_mut().set_health(80);
    let partial: UpdateBatch = [UpdateBlock::Partial {
        guid,
        values: player.marshal(true),
    }]
    .into_iter()
    .collect();
    let partial = partial.encode();
    tracing::info!(bytes = partial.len(), "partial batch");
    println!("partial: {}", hex(&partial));

    Ok(())
}

fn main() {
    init_logging();
    if let Err(e) = run() {
        tracing::error!(error = %e, "update dump failed");
        std::process::exit(1);
    }
}
