// Reveal states, see folio::motion.  the hidden offsets only apply while entering, so
// settling to visible animates everything back to its resting place; every effect
// leaves the same way, shrinking as it fades
pub const MOTION_STYLES: &str = r#"
.reveal {
  transition-property: opacity, transform;
  transition-timing-function: var(--easing-standard);
}

.reveal.visible {
  opacity: 1;
  transform: none;
}

.reveal.entering,
.reveal.exiting {
  opacity: 0;
}

.reveal.fx-rise.entering { transform: translateY(30px); }
.reveal.fx-slide-left.entering { transform: translateX(-30px); }
.reveal.fx-slide-right.entering { transform: translateX(30px); }

.reveal.fx-scale.entering,
.reveal.exiting { transform: scale(0.9); }

@keyframes pulse {
  50% { opacity: 0.5; }
}

.pulse-dot {
  display: inline-block;
  width: 8px;
  height: 8px;
  border-radius: var(--radius-full);
  background-color: var(--green-500);
  animation: pulse 2s cubic-bezier(0.4, 0, 0.6, 1) infinite;
}

.pulse-dot.large {
  width: 16px;
  height: 16px;
}
"#;
