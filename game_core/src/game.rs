use hecs::World;

use crate::fsm::{FsmState, GameAction, GameFsm};
use crate::{
    create_ball, create_paddle, step, Ball, Config, Events, GameRng, InputSnapshot, Paddle,
    Player, Time,
};

/// Everything one local match needs, updated once per frame
pub struct Game {
    pub world: World,
    pub time: Time,
    pub config: Config,
    pub events: Events,
    pub rng: GameRng,
    fsm: GameFsm,
}

impl Game {
    pub fn new(config: Config, mut rng: GameRng) -> Self {
        let mut world = World::new();

        // Create paddles
        create_paddle(&mut world, Player::One, config.paddle_spawn_y());
        create_paddle(&mut world, Player::Two, config.paddle_spawn_y());

        // Create ball
        let ball = Ball::serve(&config, &mut rng);
        create_ball(&mut world, ball.pos, ball.vel);

        Self {
            world,
            time: Time::default(),
            config,
            events: Events::new(),
            rng,
            fsm: GameFsm::new(),
        }
    }

    pub fn state(&self) -> FsmState {
        self.fsm.state()
    }

    pub fn is_terminated(&self) -> bool {
        self.fsm.is_terminated()
    }

    /// Run one frame: dispatch on the current screen, simulate while playing
    pub fn update(&mut self, input: &InputSnapshot, delta: i32) -> FsmState {
        match self.fsm.state() {
            FsmState::Start => {
                if input.start {
                    self.fsm.transition(GameAction::Start);
                }
            }
            FsmState::Playing => {
                self.time.delta = delta;
                step(
                    &mut self.world,
                    &mut self.time,
                    &self.config,
                    input,
                    &mut self.events,
                );
                if let Some(winner) = self.events.missed {
                    log::info!("Player {} wins", winner.number());
                    self.fsm.transition(GameAction::BallMissed(winner));
                }
            }
            FsmState::GameOver(_) => {
                if input.quit {
                    self.fsm.transition(GameAction::Quit);
                } else if input.restart {
                    self.reset_match();
                    self.fsm.transition(GameAction::Restart);
                }
            }
            FsmState::Terminated => {}
        }
        self.fsm.state()
    }

    /// Ball back to the centre with a new serve, paddles centred
    pub fn reset_match(&mut self) {
        let paddle_y = self.config.paddle_spawn_y();
        for (_e, paddle) in self.world.query_mut::<&mut Paddle>() {
            paddle.y = paddle_y;
        }
        for (_e, ball) in self.world.query_mut::<&mut Ball>() {
            ball.reset(&self.config, &mut self.rng);
            log::debug!("Serve from {:?} at {:?}", ball.pos, ball.vel);
        }
        self.events.clear();
    }

    pub fn ball(&self) -> Option<Ball> {
        self.world
            .query::<&Ball>()
            .iter()
            .next()
            .map(|(_e, ball)| *ball)
    }

    pub fn paddle_y(&self, player: Player) -> Option<i32> {
        self.world
            .query::<&Paddle>()
            .iter()
            .find(|(_e, p)| p.player == player)
            .map(|(_e, p)| p.y)
    }

    /// Place the ball directly
    pub fn set_ball(&mut self, ball: Ball) {
        for (_e, b) in self.world.query_mut::<&mut Ball>() {
            *b = ball;
        }
    }
}
