/// An instruction returned from [`Model::update`](crate::Model::update) or
/// [`Model::init`](crate::Model::init).
///
/// A command is either nothing, a request to terminate the program, a message
/// to feed back into the loop, or a batch of the above.  Commands are plain
/// data; the [`Program`](crate::Program) driver interprets them after each
/// transition.
///
/// # Examples
///
/// ```rust
/// use steep_core::Command;
///
/// // Do nothing:
/// let cmd: Command<()> = Command::none();
/// assert!(cmd.is_none());
///
/// // Quit the program:
/// let cmd: Command<()> = Command::quit();
/// assert!(cmd.is_quit());
/// ```
pub struct Command<Msg: Send + 'static> {
    pub(crate) inner: CommandInner<Msg>,
}

pub(crate) enum CommandInner<Msg: Send + 'static> {
    None,
    Action(Action<Msg>),
    Batch(Vec<Command<Msg>>),
}

/// Actions handled synchronously by the runtime.
pub(crate) enum Action<Msg> {
    /// Enqueue a message behind whatever is already waiting in the channel.
    Message(Msg),
    /// Quit the program.  No message is processed afterwards.
    Quit,
}

impl<Msg: Send + 'static> Command<Msg> {
    /// No-op command.
    pub fn none() -> Self {
        Command {
            inner: CommandInner::None,
        }
    }

    /// Send a message back into the update loop.
    pub fn message(msg: Msg) -> Self {
        Command {
            inner: CommandInner::Action(Action::Message(msg)),
        }
    }

    /// Quit the program.
    pub fn quit() -> Self {
        Command {
            inner: CommandInner::Action(Action::Quit),
        }
    }

    /// Combine several commands.  A batch that contains a quit quits.
    pub fn batch(cmds: impl IntoIterator<Item = Command<Msg>>) -> Self {
        let mut cmds: Vec<_> = cmds.into_iter().filter(|c| !c.is_none()).collect();
        match cmds.len() {
            0 => Command::none(),
            1 => cmds.pop().unwrap_or_default(),
            _ => Command {
                inner: CommandInner::Batch(cmds),
            },
        }
    }

    /// Whether this command does nothing.
    pub fn is_none(&self) -> bool {
        matches!(self.inner, CommandInner::None)
    }

    /// Whether executing this command ends the program.
    pub fn is_quit(&self) -> bool {
        match &self.inner {
            CommandInner::None => false,
            CommandInner::Action(Action::Quit) => true,
            CommandInner::Action(Action::Message(_)) => false,
            CommandInner::Batch(cmds) => cmds.iter().any(Command::is_quit),
        }
    }

    /// Transform the message type.
    pub fn map<NewMsg: Send + 'static>(self, f: impl Fn(Msg) -> NewMsg) -> Command<NewMsg> {
        self.map_with(&f)
    }

    fn map_with<NewMsg: Send + 'static>(self, f: &dyn Fn(Msg) -> NewMsg) -> Command<NewMsg> {
        let inner = match self.inner {
            CommandInner::None => CommandInner::None,
            CommandInner::Action(Action::Message(msg)) => {
                CommandInner::Action(Action::Message(f(msg)))
            }
            CommandInner::Action(Action::Quit) => CommandInner::Action(Action::Quit),
            CommandInner::Batch(cmds) => {
                CommandInner::Batch(cmds.into_iter().map(|c| c.map_with(f)).collect())
            }
        };
        Command { inner }
    }

    /// Flatten into the ordered list of actions this command performs.
    pub(crate) fn into_actions(self) -> Vec<Action<Msg>> {
        let mut out = Vec::new();
        self.collect_actions(&mut out);
        out
    }

    fn collect_actions(self, out: &mut Vec<Action<Msg>>) {
        match self.inner {
            CommandInner::None => {}
            CommandInner::Action(action) => out.push(action),
            CommandInner::Batch(cmds) => {
                for cmd in cmds {
                    cmd.collect_actions(out);
                }
            }
        }
    }
}

impl<Msg: Send + 'static> Default for Command<Msg> {
    fn default() -> Self {
        Command::none()
    }
}

impl<Msg: Send + std::fmt::Debug + 'static> std::fmt::Debug for Command<Msg> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.inner {
            CommandInner::None => f.write_str("Command::None"),
            CommandInner::Action(Action::Message(msg)) => {
                f.debug_tuple("Command::Message").field(msg).finish()
            }
            CommandInner::Action(Action::Quit) => f.write_str("Command::Quit"),
            CommandInner::Batch(cmds) => f.debug_list().entries(cmds).finish(),
        }
    }
}
