//! The evaluator.
//!
//! # Trampoline
//!
//! [`evaluate`] never recurses for a tail position. Each round asks
//! [`step`] what to do with the current `(ast, env)` pair, and `step`
//! answers with a [`Step`]: either the final value, or the next pair to
//! evaluate in place of this one. Tail positions are:
//!
//! - the body of `let*`
//! - the last form of `do`
//! - both branches of `if`
//! - the body of a closure being applied
//!
//! Everything else (operands, conditions, `def!` values, non-final `do`
//! forms, `let*` binding values) is evaluated by a nested `evaluate` call
//! wrapped in [`ensure_sufficient_stack`].

use mal_stack::ensure_sufficient_stack;
use mal_value::{
    arity_mismatch, malformed_form, not_callable, Closure, Environment, EvalError, EvalResult,
    Heap, Value,
};
use tracing::{debug, trace};

mod special_form;

pub use special_form::SpecialForm;

/// Outcome of one evaluation round.
pub enum Step {
    /// Evaluation finished with this value.
    Done(Value),
    /// Evaluate `ast` in `env` and use that as the result.
    TailCall { ast: Value, env: Environment },
}

/// Evaluate `ast` in `env`.
pub fn evaluate(ast: &Value, env: &Environment) -> EvalResult {
    let mut ast = ast.clone();
    let mut env = env.clone();
    loop {
        match step(&ast, &env)? {
            Step::Done(value) => return Ok(value),
            Step::TailCall {
                ast: next_ast,
                env: next_env,
            } => {
                trace!("tail call");
                ast = next_ast;
                env = next_env;
            }
        }
    }
}

/// Evaluate a form that is not in tail position.
#[inline]
fn evaluate_nested(ast: &Value, env: &Environment) -> EvalResult {
    ensure_sufficient_stack(|| evaluate(ast, env))
}

/// Run one round of evaluation.
pub fn step(ast: &Value, env: &Environment) -> Result<Step, EvalError> {
    let items = match ast {
        Value::Symbol(name) => return env.lookup(name).map(Step::Done),
        Value::List(items) if !items.is_empty() => &items[..],
        // Atoms, functions and `()` evaluate to themselves.
        _ => return Ok(Step::Done(ast.clone())),
    };

    match items[0].as_symbol().and_then(SpecialForm::from_name) {
        Some(form) => {
            trace!(form = form.name(), "special form");
            match form {
                SpecialForm::Def => eval_def(items, env),
                SpecialForm::Let => eval_let(items, env),
                SpecialForm::Do => eval_do(items, env),
                SpecialForm::If => eval_if(items, env),
                SpecialForm::Fn => eval_fn(items, env),
            }
        }
        None => eval_application(items, env),
    }
}

/// `(def! name value)`
fn eval_def(items: &[Value], env: &Environment) -> Result<Step, EvalError> {
    let [_, name, value] = items else {
        return Err(malformed_form("def!", "expected (def! name value)"));
    };
    let name = name
        .as_symbol()
        .ok_or_else(|| malformed_form("def!", "name must be a symbol"))?;
    let value = evaluate_nested(value, env)?;
    debug!(name, "def!");
    env.define(name, value.clone());
    Ok(Step::Done(value))
}

/// `(let* (name value ...) body)`
fn eval_let(items: &[Value], env: &Environment) -> Result<Step, EvalError> {
    let [_, bindings, body] = items else {
        return Err(malformed_form("let*", "expected (let* (bindings...) body)"));
    };
    let bindings = bindings
        .as_list()
        .ok_or_else(|| malformed_form("let*", "bindings must be a list"))?;
    if bindings.len() % 2 != 0 {
        return Err(malformed_form(
            "let*",
            "bindings must come in name/value pairs",
        ));
    }

    // Each value sees the bindings before it.
    let scope = env.child();
    for pair in bindings.chunks_exact(2) {
        let name = pair[0]
            .as_symbol()
            .ok_or_else(|| malformed_form("let*", "binding name must be a symbol"))?;
        let value = evaluate_nested(&pair[1], &scope)?;
        scope.define(name, value);
    }
    Ok(Step::TailCall {
        ast: body.clone(),
        env: scope,
    })
}

/// `(do form...)`
fn eval_do(items: &[Value], env: &Environment) -> Result<Step, EvalError> {
    let Some((last, init)) = items[1..].split_last() else {
        return Ok(Step::Done(Value::Nil));
    };
    for form in init {
        evaluate_nested(form, env)?;
    }
    Ok(Step::TailCall {
        ast: last.clone(),
        env: env.clone(),
    })
}

/// `(if cond then else?)`
fn eval_if(items: &[Value], env: &Environment) -> Result<Step, EvalError> {
    let (cond, then, otherwise) = match items {
        [_, cond, then] => (cond, then, None),
        [_, cond, then, otherwise] => (cond, then, Some(otherwise)),
        _ => return Err(malformed_form("if", "expected (if cond then else?)")),
    };
    let branch = if evaluate_nested(cond, env)?.is_truthy() {
        then
    } else {
        match otherwise {
            Some(otherwise) => otherwise,
            None => return Ok(Step::Done(Value::Nil)),
        }
    };
    Ok(Step::TailCall {
        ast: branch.clone(),
        env: env.clone(),
    })
}

/// `(fn* (param...) body)`
fn eval_fn(items: &[Value], env: &Environment) -> Result<Step, EvalError> {
    let [_, params, body] = items else {
        return Err(malformed_form("fn*", "expected (fn* (params...) body)"));
    };
    let params = params
        .as_list()
        .ok_or_else(|| malformed_form("fn*", "parameters must be a list"))?;
    let params = params
        .iter()
        .map(|param| match param {
            Value::Symbol(name) => Ok(name.clone()),
            _ => Err(malformed_form("fn*", "parameters must be symbols")),
        })
        .collect::<Result<Vec<Heap<str>>, _>>()?;
    Ok(Step::Done(Value::closure(params, body.clone(), env.clone())))
}

/// `(f arg...)` where `f` is not a special form.
#[tracing::instrument(level = "debug", skip_all)]
fn eval_application(items: &[Value], env: &Environment) -> Result<Step, EvalError> {
    let func = evaluate_nested(&items[0], env)?;
    let args = items[1..]
        .iter()
        .map(|arg| evaluate_nested(arg, env))
        .collect::<Result<Vec<_>, _>>()?;

    match func {
        Value::NativeFunction(native) => {
            trace!(name = native.name(), argc = args.len(), "native call");
            native.call(&args).map(Step::Done)
        }
        Value::Closure(closure) => {
            let env = bind_arguments(&closure, args)?;
            Ok(Step::TailCall {
                ast: closure.body().clone(),
                env,
            })
        }
        other => Err(not_callable(other.type_name())),
    }
}

/// Bind `args` to the closure's parameters in a fresh child of its
/// captured environment.
fn bind_arguments(closure: &Closure, args: Vec<Value>) -> Result<Environment, EvalError> {
    let params = closure.params();
    if params.len() != args.len() {
        return Err(arity_mismatch("function", params.len(), args.len()));
    }
    let scope = closure.env().child();
    for (param, arg) in params.iter().zip(args) {
        scope.define(param, arg);
    }
    Ok(scope)
}
