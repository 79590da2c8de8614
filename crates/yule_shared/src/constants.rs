//! # Scene Tuning Constants
//!
//! Production configuration for the card's particle populations.
//!
//! **CRITICAL:** These values are baked into the binary and define the look
//! of the card. Renderer-side styles (point sizes, opacities) live here too
//! so the render host and the engine never disagree.

// =============================================================================
// WORLD FRAME
// =============================================================================

/// Offset the render host applies to the whole scene group.
///
/// Populations are generated around the origin; the host shifts them down
/// so the floor sits below the camera line.
pub const SCENE_ROOT_OFFSET_Y: f32 = -3.0;

/// Fixed simulation tick rate (updates per second)
pub const TICK_RATE: u32 = 60;

/// Largest delta the clock will accept in one advance, in seconds.
///
/// Hitches longer than this are swallowed rather than integrated.
pub const MAX_DELTA: f32 = 0.1;

// =============================================================================
// TREE BODY
// =============================================================================

/// Main tree particle count
pub const TREE_PARTICLES: usize = 32_000;

/// Tree height in world units
pub const TREE_HEIGHT: f32 = 12.0;

/// Cone radius at the tree base
pub const TREE_MAX_BASE_RADIUS: f32 = 7.5;

/// Number of branch layers stacked up the cone
pub const TREE_LAYERS: f32 = 8.0;

/// Downward shift applied to every tree-frame particle
pub const TREE_BASE_DROP: f32 = 2.5;

/// Branch droop per unit of normalized radius
pub const TREE_DROOP: f32 = 1.5;

/// Exponent pulling particles toward the branch surface
pub const TREE_RADIAL_EXPONENT: f32 = 0.35;

/// Color roll above this is primary red
pub const TREE_RED_THRESHOLD: f32 = 0.4;

/// Color roll above this (and below the red cut) is gold
pub const TREE_GOLD_THRESHOLD: f32 = 0.15;

/// Half-amplitude of the red saturation jitter
pub const TREE_JITTER_SATURATION: f32 = 0.025;

/// Half-amplitude of the red lightness jitter
pub const TREE_JITTER_LIGHTNESS: f32 = 0.1;

/// Tree spin rate (radians per second, negative = clockwise from above)
pub const TREE_SPIN_RATE: f32 = -0.1;

// =============================================================================
// ORNAMENTS
// =============================================================================

/// Large bauble count
pub const ORNAMENT_LARGE_COUNT: usize = 140;

/// Small bauble count
pub const ORNAMENT_SMALL_COUNT: usize = 250;

/// Margin kept clear of the trunk base and the tip
pub const ORNAMENT_HEIGHT_MARGIN: f32 = 0.5;

/// Shell placement factor range: ornaments sit at 0.9..1.05 of the branch tip
pub const ORNAMENT_SHELL_MIN: f32 = 0.9;

/// Width of the shell placement band
pub const ORNAMENT_SHELL_RANGE: f32 = 0.15;

/// Sway frequency on top of the shared tree spin (radians per second)
pub const ORNAMENT_SWAY_RATE: f32 = 0.5;

/// Sway amplitude (radians)
pub const ORNAMENT_SWAY_AMPLITUDE: f32 = 0.05;

/// Vertical bob frequency of the large tier
pub const ORNAMENT_BOB_LARGE_RATE: f32 = 1.0;

/// Vertical bob amplitude of the large tier
pub const ORNAMENT_BOB_LARGE_AMPLITUDE: f32 = 0.05;

/// Vertical bob frequency of the small tier
pub const ORNAMENT_BOB_SMALL_RATE: f32 = 1.2;

/// Vertical bob amplitude of the small tier
pub const ORNAMENT_BOB_SMALL_AMPLITUDE: f32 = 0.03;

// =============================================================================
// HEART TOPPER
// =============================================================================

/// Heart particle count
pub const TOPPER_PARTICLES: usize = 1_200;

/// Half-extent of the rejection-sampling cube
pub const TOPPER_SAMPLE_HALF_EXTENT: f32 = 1.5;

/// Vertical stretch applied before the implicit-surface test
pub const TOPPER_VERTICAL_STRETCH: f32 = 1.2;

/// Uniform shrink applied to accepted samples
pub const TOPPER_SHRINK: f32 = 0.6;

/// Upward nudge applied after shrinking
pub const TOPPER_LIFT: f32 = 0.2;

/// World position of the heart above the tree
pub const TOPPER_HEIGHT: f32 = 9.8;

/// Heartbeat pulse amplitude on top of unit scale
pub const TOPPER_PULSE_AMPLITUDE: f32 = 0.1;

/// Heartbeat pulse frequency (radians per second)
pub const TOPPER_PULSE_RATE: f32 = 3.0;

// =============================================================================
// FLOOR RIPPLES
// =============================================================================

/// Floor particle count
pub const FLOOR_PARTICLES: usize = 35_000;

/// Floor rest height in the scene frame
pub const FLOOR_LEVEL: f32 = -3.0;

/// Inner radius of the floor disc
pub const FLOOR_INNER_RADIUS: f32 = 1.0;

/// Width of the floor disc band beyond the inner radius
pub const FLOOR_RADIUS_RANGE: f32 = 30.0;

/// Radius at which the floor color is fully ice blue
pub const FLOOR_COLOR_FALLOFF_RADIUS: f32 = 35.0;

/// Spatial frequency of the ripple wave
pub const FLOOR_WAVE_FREQUENCY: f32 = 1.5;

/// Exponential decay of ripple amplitude with distance
pub const FLOOR_WAVE_DECAY: f32 = 0.03;

/// Ripple phase speed when the card is activated
pub const FLOOR_SPEED_ACTIVE: f32 = 2.0;

/// Ripple phase speed before activation
pub const FLOOR_SPEED_IDLE: f32 = 1.0;

/// Ripple amplitude when the card is activated
pub const FLOOR_AMPLITUDE_ACTIVE: f32 = 0.25;

/// Ripple amplitude before activation
pub const FLOOR_AMPLITUDE_IDLE: f32 = 0.1;

// =============================================================================
// SNOWFALL
// =============================================================================

/// Snowflake count
pub const SNOW_PARTICLES: usize = 2_500;

/// Horizontal half-extent of the snow volume
pub const SNOW_HALF_EXTENT: f32 = 25.0;

/// Bottom of the spawn band
pub const SNOW_SPAWN_MIN_Y: f32 = 5.0;

/// Height of the spawn band above its bottom
pub const SNOW_SPAWN_RANGE_Y: f32 = 30.0;

/// Slowest fall speed (units per tick)
pub const SNOW_SPEED_MIN: f32 = 0.02;

/// Width of the fall speed band
pub const SNOW_SPEED_RANGE: f32 = 0.05;

/// Sideways drift amplitude per tick
pub const SNOW_DRIFT: f32 = 0.01;

/// Flakes below this height respawn
pub const SNOW_FLOOR_Y: f32 = -5.0;

/// Respawn height
pub const SNOW_RESPAWN_Y: f32 = 25.0;

// =============================================================================
// SIDE NAME
// =============================================================================

/// Anchor of the floating side name, scene frame
pub const SIDE_NAME_POSITION: [f32; 3] = [9.0, 8.0, 0.0];

/// Y rotation of the side name panel (radians)
pub const SIDE_NAME_ROTATION: f32 = -0.2;

/// Vertical wave: frequency over time
pub const SIDE_NAME_WAVE_Y_RATE: f32 = 1.5;

/// Vertical wave: phase per unit of base X
pub const SIDE_NAME_WAVE_Y_PHASE: f32 = 0.5;

/// Vertical wave amplitude
pub const SIDE_NAME_WAVE_Y_AMPLITUDE: f32 = 0.1;

/// Depth wave: frequency over time
pub const SIDE_NAME_WAVE_Z_RATE: f32 = 1.2;

/// Depth wave: phase per unit of base Y
pub const SIDE_NAME_WAVE_Z_PHASE: f32 = 0.5;

/// Depth wave amplitude
pub const SIDE_NAME_WAVE_Z_AMPLITUDE: f32 = 0.05;

// =============================================================================
// NAME SEQUENCE
// =============================================================================

/// Capacity of the sequence particle buffer
pub const SEQUENCE_MAX_PARTICLES: usize = 7_000;

/// Delay between activation and rocket launch, in time units
pub const SEQUENCE_LAUNCH_DELAY: f32 = 1.0;

/// Rocket start height (scene frame)
pub const ROCKET_START_Y: f32 = -2.0;

/// Rocket ascent rate (units per second, dt-scaled)
pub const ROCKET_SPEED: f32 = 12.0;

/// Rocket wobble frequency (radians per second)
pub const ROCKET_WOBBLE_RATE: f32 = 20.0;

/// Rocket wobble amplitude
pub const ROCKET_WOBBLE_AMPLITUDE: f32 = 0.05;

/// Height at which the rocket detonates
pub const SEQUENCE_LAUNCH_HEIGHT: f32 = 12.0;

/// Hang time between detonation and text formation, in time units
pub const SEQUENCE_FORM_DELAY: f32 = 1.5;

/// Slowest explosion particle speed (units per tick)
pub const EXPLOSION_SPEED_MIN: f32 = 0.2;

/// Width of the explosion speed band
pub const EXPLOSION_SPEED_RANGE: f32 = 0.6;

/// Fraction of particles that get a speed spike
pub const EXPLOSION_SPIKE_CHANCE: f32 = 0.15;

/// Speed multiplier for spiked particles
pub const EXPLOSION_SPIKE_FACTOR: f32 = 1.8;

/// Downward acceleration during the explosion (units per tick, per tick)
pub const EXPLOSION_GRAVITY: f32 = 0.006;

/// Velocity retained each tick during the explosion
pub const EXPLOSION_DRAG: f32 = 0.95;

/// Half-amplitude of explosion color saturation jitter
pub const EXPLOSION_JITTER_SATURATION: f32 = 0.05;

/// Half-amplitude of explosion color lightness jitter
pub const EXPLOSION_JITTER_LIGHTNESS: f32 = 0.1;

/// Per-frame chance a shimmering particle flashes white
pub const TWINKLE_CHANCE: f32 = 0.05;

/// Position convergence factor per tick while forming text
pub const FORMING_POSITION_LERP: f32 = 0.04;

/// Color convergence factor per tick while forming text
pub const FORMING_COLOR_LERP: f32 = 0.05;

/// Fall rate of surplus particles (units per tick)
pub const FORMING_FALL_RATE: f32 = 0.1;

/// Surplus particles below this height are parked
pub const FORMING_DISCARD_Y: f32 = -10.0;

/// Parking height for discarded particles, far off screen
pub const PARKED_Y: f32 = -1000.0;

/// X coordinate marking a "no glyph target" slot
pub const FALL_AWAY_TARGET_X: f32 = 9999.0;

// =============================================================================
// BACKGROUND FIREWORKS
// =============================================================================

/// Particles per ambient burst
pub const BURST_PARTICLES: usize = 300;

/// Burst lifetime in time units
pub const BURST_LIFETIME: f32 = 2.0;

/// Slowest burst particle speed (units per tick)
pub const BURST_SPEED_MIN: f32 = 0.1;

/// Width of the burst speed band
pub const BURST_SPEED_RANGE: f32 = 0.5;

/// Downward pull on burst particles, scaled by age
pub const BURST_GRAVITY: f32 = 0.05;

/// Shortest wait between launches, in time units
pub const BURST_INTERVAL_MIN: f32 = 0.5;

/// Width of the launch wait band
pub const BURST_INTERVAL_RANGE: f32 = 1.5;

/// Horizontal half-extent of launch origins
pub const BURST_ORIGIN_HALF_EXTENT_X: f32 = 20.0;

/// Lowest launch origin height
pub const BURST_ORIGIN_MIN_Y: f32 = 10.0;

/// Height of the launch origin band
pub const BURST_ORIGIN_RANGE_Y: f32 = 15.0;

/// Nearest launch origin depth (bursts sit behind the tree)
pub const BURST_ORIGIN_MAX_Z: f32 = 0.0;

/// Depth of the launch origin band behind `BURST_ORIGIN_MAX_Z`
pub const BURST_ORIGIN_RANGE_Z: f32 = 20.0;

// =============================================================================
// POINT STYLES (renderer-side, paired with engine state)
// =============================================================================

/// Tree point size when activated / idle
pub const TREE_SIZE: (f32, f32) = (0.14, 0.12);

/// Tree opacity when activated / idle
pub const TREE_OPACITY: (f32, f32) = (0.95, 0.8);

/// Floor point size
pub const FLOOR_SIZE: f32 = 0.12;

/// Floor opacity when activated / idle
pub const FLOOR_OPACITY: (f32, f32) = (0.8, 0.5);

/// Large / small ornament point sizes
pub const ORNAMENT_SIZE: (f32, f32) = (0.35, 0.2);

/// Large / small ornament opacities
pub const ORNAMENT_OPACITY: (f32, f32) = (1.0, 0.9);

/// Heart topper point size and opacity
pub const TOPPER_STYLE: (f32, f32) = (0.12, 0.9);

/// Snow point size and opacity
pub const SNOW_STYLE: (f32, f32) = (0.2, 0.8);

/// Side name point size and opacity
pub const SIDE_NAME_STYLE: (f32, f32) = (0.25, 0.9);

/// Sequence point size (opacity stays 1)
pub const SEQUENCE_SIZE: f32 = 0.3;

/// Burst point size
pub const BURST_SIZE: f32 = 0.5;

/// Rocket radius (rendered as a small gold sphere)
pub const ROCKET_RADIUS: f32 = 0.15;
