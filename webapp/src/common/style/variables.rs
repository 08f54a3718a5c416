pub const CSS_VARIABLES: &str = r#"
:root {
  /* Brand */
  --blue-400: #60A5FA;
  --blue-500: #3B82F6;
  --blue-600: #2563EB;
  --cyan-400: #22D3EE;
  --cyan-500: #06B6D4;
  --purple-400: #C084FC;
  --purple-500: #A855F7;
  --green-400: #4ADE80;
  --green-500: #22C55E;
  --green-800: #166534;

  /* Neutrals */
  --gray-100: #F3F4F6;
  --gray-200: #E5E7EB;
  --gray-300: #D1D5DB;
  --gray-400: #9CA3AF;
  --gray-500: #6B7280;
  --gray-600: #4B5563;
  --gray-700: #374151;
  --gray-800: #1F2937;
  --gray-900: #111827;

  /* Light theme */
  --light-background: linear-gradient(135deg, #EEF2FF 0%, #F8FAFC 45%, #F5F3FF 100%);
  --light-glass: rgba(255, 255, 255, 0.7);
  --light-glass-strong: rgba(255, 255, 255, 0.8);
  --light-glass-soft: rgba(255, 255, 255, 0.6);
  --light-border: rgba(255, 255, 255, 0.4);
  --light-text-primary: var(--gray-900);
  --light-text-body: var(--gray-700);
  --light-text-muted: var(--gray-600);
  --light-accent: var(--blue-600);

  /* Dark theme */
  --dark-background: radial-gradient(circle at 20% 0%, #0B1120 0%, #020617 60%, #000000 100%);
  --dark-glass: rgba(255, 255, 255, 0.05);
  --dark-glass-strong: rgba(255, 255, 255, 0.1);
  --dark-glass-soft: rgba(255, 255, 255, 0.1);
  --dark-border: rgba(255, 255, 255, 0.2);
  --dark-text-primary: #FFFFFF;
  --dark-text-body: var(--gray-300);
  --dark-text-muted: var(--gray-400);
  --dark-accent: var(--blue-400);

  /* Glow */
  --glow-cyan: 0 0 20px rgba(6, 182, 212, 0.5);
  --glow-cyan-strong: 0 0 30px rgba(6, 182, 212, 0.7);
  --glow-blue: 0 0 30px rgba(10, 132, 255, 0.3);

  /* Layout */
  --header-height: 80px;

  /* Spacing System */
  --space-1: 4px;
  --space-2: 8px;
  --space-3: 12px;
  --space-4: 16px;
  --space-6: 24px;
  --space-8: 32px;
  --space-12: 48px;
  --space-16: 64px;
  --space-20: 80px;

  /* Border Radius */
  --radius-sm: 8px;
  --radius-md: 12px;
  --radius-lg: 16px;
  --radius-xl: 20px;
  --radius-full: 9999px;

  /* Blur */
  --blur-sm: blur(20px);
  --blur-md: blur(30px);
  --blur-lg: blur(40px);

  /* Animation */
  --transition-fast: 150ms;
  --transition-normal: 300ms;
  --transition-slow: 500ms;
  --easing-standard: cubic-bezier(0.4, 0.0, 0.2, 1);
}"#;
