use crate::pet::Mood;

/// A looping or one-shot sequence of text faces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Clip {
    Mood(Mood),
    Eating,
    Playing,
}

impl Clip {
    pub fn frames(self) -> &'static [&'static str] {
        match self {
            Clip::Mood(Mood::Happy) => &["(＾▽＾)", "(＾ω＾)", "(＾▽＾)", "(＾ω＾)"],
            Clip::Mood(Mood::Tired) => &["(⊙_⊙)", "(⊙︿⊙)", "(⊙_⊙)", "(⊙︿⊙)"],
            Clip::Mood(Mood::Sick) => &["(≧﹏≦)", "(╥﹏╥)", "(≧﹏≦)", "(╥﹏╥)"],
            Clip::Mood(Mood::Neutral) => &["(￣ー￣)", "(￣ω￣)", "(￣ー￣)", "(￣ω￣)"],
            Clip::Mood(Mood::Dead) => &["(✖╭╮✖)", "(✖﹏✖)", "(✖╭╮✖)", "(✖﹏✖)"],
            Clip::Eating => &["(っ˘ڡ˘ς)", "(づ｡◕‿‿◕｡)づ", "(っ˘ڡ˘ς)", "(づ｡◕‿‿◕｡)づ"],
            Clip::Playing => &["(ﾉ◕ヮ◕)ﾉ*:･ﾟ✧", "(ﾉ^_^)ﾉ", "(ﾉ◕ヮ◕)ﾉ*:･ﾟ✧", "(ﾉ^_^)ﾉ"],
        }
    }

    /// Mood clips loop forever; action clips play once.
    pub fn looping(self) -> bool {
        matches!(self, Clip::Mood(_))
    }
}

/// Animation frame state for the pet's face.
#[derive(Debug, Clone, Copy)]
pub struct AnimationState {
    pub clip: Clip,
    pub frame: usize,
    pub elapsed: f32,
    /// Seconds per frame.
    pub frame_time: f32,
}

impl AnimationState {
    pub fn new(frame_time: f32) -> Self {
        Self {
            clip: Clip::Mood(Mood::Neutral),
            frame: 0,
            elapsed: 0.0,
            frame_time,
        }
    }

    /// Start a one-shot clip from its first frame.
    pub fn play_once(&mut self, clip: Clip) {
        self.clip = clip;
        self.frame = 0;
        self.elapsed = 0.0;
    }

    /// Advance by `dt` seconds. `mood` is what to loop once any one-shot ends.
    ///
    /// The loop frame counter keeps running across mood changes.
    pub fn update(&mut self, dt: f32, mood: Mood) {
        if self.clip.looping() {
            self.clip = Clip::Mood(mood);
        }
        if self.frame_time <= 0.0 {
            return;
        }

        self.elapsed += dt;
        while self.elapsed >= self.frame_time {
            self.elapsed -= self.frame_time;
            self.frame += 1;

            let len = self.clip.frames().len();
            if self.frame >= len {
                if self.clip.looping() {
                    self.frame %= len;
                } else {
                    self.clip = Clip::Mood(mood);
                    self.frame = 0;
                }
            }
        }
    }

    /// Face to draw right now.
    pub fn current(&self) -> &'static str {
        let frames = self.clip.frames();
        frames[self.frame % frames.len()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_clip_has_frames() {
        for mood in Mood::ALL {
            assert!(!Clip::Mood(mood).frames().is_empty());
        }
        assert_eq!(Clip::Eating.frames().len(), 4);
        assert_eq!(Clip::Playing.frames().len(), 4);
    }

    #[test]
    fn mood_loop_wraps() {
        let mut anim = AnimationState::new(0.5);
        anim.update(0.0, Mood::Happy);
        assert_eq!(anim.current(), "(＾▽＾)");
        anim.update(0.5, Mood::Happy);
        assert_eq!(anim.current(), "(＾ω＾)");
        anim.update(1.5, Mood::Happy);
        assert_eq!(anim.frame, 0);
        assert_eq!(anim.clip, Clip::Mood(Mood::Happy));
    }

    #[test]
    fn loop_follows_mood_changes() {
        let mut anim = AnimationState::new(0.5);
        anim.update(0.1, Mood::Happy);
        anim.update(0.1, Mood::Sick);
        assert_eq!(anim.clip, Clip::Mood(Mood::Sick));
    }

    #[test]
    fn one_shot_returns_to_mood() {
        let mut anim = AnimationState::new(0.5);
        anim.play_once(Clip::Eating);
        assert_eq!(anim.current(), "(っ˘ڡ˘ς)");

        // Mood changes do not interrupt the one-shot.
        anim.update(0.5, Mood::Tired);
        assert_eq!(anim.clip, Clip::Eating);
        assert_eq!(anim.frame, 1);

        anim.update(1.5, Mood::Tired);
        assert_eq!(anim.clip, Clip::Mood(Mood::Tired));
        assert_eq!(anim.frame, 0);
    }
}
