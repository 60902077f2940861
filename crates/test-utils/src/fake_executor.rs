use std::future::Future;
use std::pin::Pin;
use std::sync::{Arc, Mutex};

use sbt_task::config::ConfigurationReader;
use sbt_task::exec::{
    ConsoleSink, ExecutionContext, ExecutionResult, SbtTaskExecutor, SUCCESS, TaskExecutor,
};

/// A fake executor that:
/// - resolves the command exactly like `SbtTaskExecutor`
/// - records the tokens instead of spawning anything
/// - reports `Success` for every task.
pub struct FakeExecutor {
    resolver: SbtTaskExecutor,
    executed: Arc<Mutex<Vec<Vec<String>>>>,
}

impl FakeExecutor {
    pub fn new(resolver: SbtTaskExecutor, executed: Arc<Mutex<Vec<Vec<String>>>>) -> Self {
        Self { resolver, executed }
    }
}

impl TaskExecutor for FakeExecutor {
    fn execute<'a>(
        &'a self,
        context: &'a ExecutionContext,
        config: &'a dyn ConfigurationReader,
        console: Arc<dyn ConsoleSink>,
    ) -> Pin<Box<dyn Future<Output = ExecutionResult> + Send + 'a>> {
        let executed = Arc::clone(&self.executed);

        Box::pin(async move {
            let command = self.resolver.resolve(context, config);
            console.print_line(&format!("would run: {command}"));
            executed.lock().unwrap().push(command.tokens());
            ExecutionResult::success(SUCCESS)
        })
    }
}
